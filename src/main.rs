//! arbridge — build and inspect AR activation URLs from the command line.
//!
//! Lets you construct the exact Scene Viewer `intent://` URI or Quick
//! Look URL a viewer element would hand to the browser, and dry-run mode
//! selection against a YAML config, without needing a device in hand.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use url::Url;

use arbridge::activate::XrRenderer;
use arbridge::config::ArConfig;
use arbridge::error::ArError;
use arbridge::intent::{
    ApplePayButtonKind, BannerHeight, QuickLookIntent, QuickLookParams, SceneViewerIntent,
    SceneViewerParams,
};
use arbridge::mode::{select_mode, Browser, ModeGating, Platform, SelectionContext, SessionBlocks};

#[derive(Parser)]
#[command(name = "arbridge", version, about = "Build AR activation URLs for 3D-model viewers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an Android Scene Viewer intent URI.
    SceneViewer(SceneViewerArgs),
    /// Build an iOS AR Quick Look URL.
    QuickLook(QuickLookArgs),
    /// Run mode selection for a config file and declared platform flags.
    Select(SelectArgs),
}

#[derive(Args)]
struct SceneViewerArgs {
    /// GLB/GLTF model URL, absolute or relative to --page.
    src: String,
    /// Page the viewer is embedded in.
    #[arg(long, default_value = "https://localhost/")]
    page: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    link: Option<String>,
    #[arg(long)]
    sound: Option<String>,
    /// Opened by the browser when no native app answers the intent.
    #[arg(long)]
    fallback_url: Option<String>,
    /// Pin the model to the page-chosen scale.
    #[arg(long)]
    fixed_scale: bool,
}

#[derive(Args)]
struct QuickLookArgs {
    /// USDZ model URL, absolute or relative to --page.
    ios_src: String,
    /// Page the viewer is embedded in.
    #[arg(long, default_value = "https://localhost/")]
    page: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    link: Option<String>,
    #[arg(long)]
    subtitle: Option<String>,
    #[arg(long)]
    price: Option<String>,
    /// plain | pay | buy | check-out | book | donate | subscribe
    #[arg(long)]
    apple_pay_button: Option<String>,
    #[arg(long)]
    call_to_action: Option<String>,
    #[arg(long)]
    custom_banner: Option<String>,
    /// small | medium | large
    #[arg(long)]
    banner_height: Option<String>,
    /// Pin the model to the page-chosen scale.
    #[arg(long)]
    fixed_scale: bool,
}

#[derive(Args)]
struct SelectArgs {
    /// Viewer configuration (YAML).
    config: PathBuf,
    #[arg(long)]
    webxr_capable: bool,
    #[arg(long)]
    scene_viewer_capable: bool,
    #[arg(long)]
    quick_look_capable: bool,
    #[arg(long)]
    android: bool,
    /// safari | chrome | other
    #[arg(long, default_value = "other")]
    browser: String,
    /// Assume the renderer would grant a WebXR session.
    #[arg(long)]
    webxr_session: bool,
    /// Additionally require Android for Scene Viewer.
    #[arg(long)]
    scene_viewer_needs_android: bool,
    /// Browsers allowed to use Quick Look, space-separated.
    #[arg(long)]
    quick_look_browsers: Option<String>,
}

/// Stand-in renderer for dry-run selection: answers the capability probe
/// from a flag and never presents.
struct StubRenderer {
    supports: bool,
}

#[async_trait(?Send)]
impl XrRenderer for StubRenderer {
    async fn supports_presentation(&self) -> bool {
        self.supports
    }

    async fn present(&mut self) -> Result<(), ArError> {
        Err(ArError::present("stub renderer cannot present"))
    }

    async fn stop_presenting(&mut self) -> Result<(), ArError> {
        Ok(())
    }

    fn scene_loaded(&self) -> bool {
        true
    }

    async fn load_scene(&mut self) -> Result<(), ArError> {
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::SceneViewer(args) => scene_viewer(args),
        Command::QuickLook(args) => quick_look(args),
        Command::Select(args) => select(args),
    }
}

fn parse_page(page: &str) -> Url {
    match Url::parse(page) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("invalid --page url `{page}`: {e}");
            process::exit(1);
        }
    }
}

fn resolve_model(page: &Url, src: &str) -> Url {
    match page.join(src) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("invalid model url `{src}`: {e}");
            process::exit(1);
        }
    }
}

fn parse_or_exit<T>(what: &str, value: &str) -> T
where
    T: FromStr<Err = ArError>,
{
    match value.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid {what}: {e}");
            process::exit(1);
        }
    }
}

fn scene_viewer(args: SceneViewerArgs) {
    let page = parse_page(&args.page);
    let file = resolve_model(&page, &args.src);
    let params = SceneViewerParams {
        title: args.title,
        fallback_url: args.fallback_url,
        resizable: !args.fixed_scale,
        link: args.link,
        sound: args.sound,
    };
    println!("{}", SceneViewerIntent::new(&page, file, params).to_url());
}

fn quick_look(args: QuickLookArgs) {
    let page = parse_page(&args.page);
    let file = resolve_model(&page, &args.ios_src);
    let params = QuickLookParams {
        title: args.title,
        checkout_subtitle: args.subtitle,
        price: args.price,
        resizable: !args.fixed_scale,
        link: args.link,
        apple_pay_button: args
            .apple_pay_button
            .map(|v| parse_or_exit::<ApplePayButtonKind>("--apple-pay-button", &v)),
        call_to_action: args.call_to_action,
        custom_banner: args.custom_banner,
        custom_banner_height: args
            .banner_height
            .map(|v| parse_or_exit::<BannerHeight>("--banner-height", &v)),
    };
    println!("{}", QuickLookIntent::new(&page, file, params).to_url());
}

fn select(args: SelectArgs) {
    let config = match ArConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            process::exit(1);
        }
    };

    let platform = Platform {
        webxr_capable: args.webxr_capable,
        scene_viewer_capable: args.scene_viewer_capable,
        quick_look_capable: args.quick_look_capable,
        is_android: args.android,
        browser: parse_or_exit::<Browser>("--browser", &args.browser),
    };
    let mut gating = ModeGating {
        scene_viewer_needs_android: args.scene_viewer_needs_android,
        ..ModeGating::default()
    };
    if let Some(set) = args.quick_look_browsers.as_deref() {
        gating.quick_look_browsers = arbridge::mode::QuickLookBrowsers::parse(set);
    }

    let blocks = SessionBlocks::new();
    let ctx = SelectionContext {
        ar_enabled: config.ar,
        has_ios_src: config.has_ios_src(),
        platform: &platform,
        gating: &gating,
        blocks: &blocks,
    };
    let probe = StubRenderer {
        supports: args.webxr_session,
    };

    let mode = pollster::block_on(select_mode(&config.modes, &ctx, &probe));
    println!("{mode}");
}

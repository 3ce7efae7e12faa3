//! Intent URL serialization — the wire-format contract for both
//! platforms, exercised through the public intent types.

use arbridge::intent::{
    ApplePayButtonKind, BannerHeight, QuickLookIntent, QuickLookParams, SceneViewerIntent,
    SceneViewerParams,
};
use url::Url;

fn page() -> Url {
    Url::parse("https://shop.example/products/chair.html").unwrap()
}

fn scene_viewer(model: &str, params: SceneViewerParams) -> String {
    SceneViewerIntent::new(&page(), Url::parse(model).unwrap(), params).to_url()
}

fn quick_look(usdz: &str, params: QuickLookParams) -> String {
    QuickLookIntent::new(&page(), Url::parse(usdz).unwrap(), params).to_url()
}

// ============================================================================
// Universal filter invariant
// ============================================================================

#[test]
fn no_url_carries_an_absent_or_empty_field() {
    let sv = scene_viewer(
        "https://cdn.example/chair.glb",
        SceneViewerParams {
            title: Some(String::new()),
            link: None,
            sound: Some(String::new()),
            fallback_url: None,
            resizable: true,
        },
    );
    assert!(!sv.contains("title="));
    assert!(!sv.contains("link="));
    assert!(!sv.contains("sound="));
    assert!(!sv.contains("resizable="));
    assert!(!sv.contains("S.browser_fallback_url"));

    let ql = quick_look(
        "https://cdn.example/chair.usdz",
        QuickLookParams {
            title: None,
            checkout_subtitle: Some(String::new()),
            price: None,
            ..QuickLookParams::default()
        },
    );
    let fragment = ql.split_once('#').unwrap().1;
    assert_eq!(fragment, "allowsContentScaling=1");
}

// ============================================================================
// Scene Viewer
// ============================================================================

#[test]
fn scene_viewer_preserves_model_query_parameters_verbatim() {
    let url = scene_viewer(
        "https://example.com/model.gltf?token=foo",
        SceneViewerParams::default(),
    );
    let query = url.split_once('?').unwrap().1;
    assert!(query.contains("token=foo"), "query was: {query}");
    assert!(!query.contains("token%3Dfoo"));
}

#[test]
fn scene_viewer_resolves_relative_link_and_sound() {
    let url = scene_viewer(
        "https://cdn.example/chair.glb",
        SceneViewerParams {
            link: Some("foo.html".into()),
            sound: Some("bar.ogg".into()),
            ..SceneViewerParams::default()
        },
    );
    assert!(url.contains("link=https://shop.example/products/foo.html"));
    assert!(url.contains("sound=https://shop.example/products/bar.ogg"));
}

#[test]
fn scene_viewer_intent_envelope_is_fixed() {
    let url = scene_viewer("https://cdn.example/chair.glb", SceneViewerParams::default());
    assert!(url.starts_with("intent://arvr.google.com/scene-viewer/1.0?file="));
    assert!(url.contains("mode=ar_only"));
    let fragment = url.split_once('#').unwrap().1;
    assert!(fragment.starts_with("Intent;scheme=https;"));
    assert!(fragment.contains("package=com.google.ar.core;"));
    assert!(fragment.contains("action=android.intent.action.VIEW;"));
    assert!(fragment.ends_with("end;"));
}

#[test]
fn scene_viewer_title_and_fallback_are_the_only_encoded_fields() {
    let url = scene_viewer(
        "https://cdn.example/chair.glb?v=2",
        SceneViewerParams {
            title: Some("Café Chair".into()),
            fallback_url: Some("https://shop.example/no-ar?x=1".into()),
            ..SceneViewerParams::default()
        },
    );
    assert!(url.contains("title=Caf%C3%A9%20Chair"));
    assert!(url.contains("S.browser_fallback_url=https%3A%2F%2Fshop.example%2Fno-ar%3Fx%3D1;"));
    assert!(url.contains("file=https://cdn.example/chair.glb?v=2"));
}

// ============================================================================
// Quick Look
// ============================================================================

#[test]
fn quick_look_field_renames_are_exact() {
    let url = quick_look(
        "https://cdn.example/chair.usdz",
        QuickLookParams {
            title: Some("Space Chair".into()),
            link: Some("https://shop.example/chair".into()),
            resizable: false,
            ..QuickLookParams::default()
        },
    );
    let fragment = url.split_once('#').unwrap().1;
    assert!(fragment.contains("checkoutTitle=Space%20Chair"));
    assert!(fragment.contains("canonicalWebPageURL=https%3A%2F%2Fshop.example%2Fchair"));
    assert!(fragment.contains("allowsContentScaling=0"));
}

#[test]
fn quick_look_fixed_scale_is_zero_and_banner_rides_alongside() {
    let url = quick_look(
        "https://cdn.example/chair.usdz",
        QuickLookParams {
            resizable: false,
            custom_banner: Some("https://shop.example/banner.html".into()),
            custom_banner_height: Some(BannerHeight::Small),
            ..QuickLookParams::default()
        },
    );
    let fragment = url.split_once('#').unwrap().1;
    assert!(fragment.contains("allowsContentScaling=0"));
    assert!(fragment.contains("custom=https%3A%2F%2Fshop.example%2Fbanner.html"));
    assert!(fragment.contains("customHeight=small"));
}

#[test]
fn quick_look_full_banner_serializes_every_field() {
    let url = quick_look(
        "https://cdn.example/chair.usdz",
        QuickLookParams {
            title: Some("Chair".into()),
            checkout_subtitle: Some("Oak".into()),
            price: Some("$129".into()),
            resizable: true,
            link: Some("chair.html".into()),
            apple_pay_button: Some(ApplePayButtonKind::Buy),
            call_to_action: Some("Preorder now".into()),
            custom_banner: None,
            custom_banner_height: None,
        },
    );
    let fragment = url.split_once('#').unwrap().1;
    assert!(fragment.contains("allowsContentScaling=1"));
    assert!(fragment.contains("checkoutTitle=Chair"));
    assert!(fragment.contains("checkoutSubtitle=Oak"));
    assert!(fragment.contains("price=%24129"));
    assert!(
        fragment.contains("canonicalWebPageURL=https%3A%2F%2Fshop.example%2Fproducts%2Fchair.html")
    );
    assert!(fragment.contains("applePayButtonType=buy"));
    assert!(fragment.contains("callToAction=Preorder%20now"));
}

#[test]
fn quick_look_without_banner_buttons_still_produces_a_valid_url() {
    // Degraded UX (a bare banner) is warned about, never an error.
    let url = quick_look("https://cdn.example/chair.usdz", QuickLookParams::default());
    let parsed = Url::parse(&url).expect("quick-look url must stay parseable");
    assert_eq!(parsed.fragment(), Some("allowsContentScaling=1"));
}

#[test]
fn serialization_is_deterministic() {
    let build = || {
        quick_look(
            "https://cdn.example/chair.usdz",
            QuickLookParams {
                title: Some("Chair".into()),
                price: Some("$1".into()),
                ..QuickLookParams::default()
            },
        )
    };
    assert_eq!(build(), build());

    let build_sv = || {
        scene_viewer(
            "https://cdn.example/chair.glb?sig=abc",
            SceneViewerParams {
                title: Some("Chair".into()),
                ..SceneViewerParams::default()
            },
        )
    };
    assert_eq!(build_sv(), build_sv());
}

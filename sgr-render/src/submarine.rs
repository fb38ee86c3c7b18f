//! The submarine icon, its bubbles, and the CSS that animates them.

use std::fmt::Write as _;

use crate::{config::GridConfig, waypoint::Keyframe};

pub const SUB_ID: &str = "sub";
pub const BUBBLE_CLASS: &str = "bubble";

const HULL: &str = "#003366";
const FIN: &str = "#005599";
const WINDOW: &str = "#66ccff";

/// Stylesheet with the `moveSub` path animation and the `bubbleRise` loop.
pub fn animation_css(keyframes: &[Keyframe], config: &GridConfig) -> String {
    let mut css = String::new();
    css.push_str("@keyframes moveSub {\n");
    for keyframe in keyframes {
        let _ = writeln!(&mut css, "  {}", keyframe);
    }
    css.push_str("}\n");
    let _ = writeln!(
        &mut css,
        "#{SUB_ID} {{ animation: moveSub {}s linear infinite; transform-origin: 0 0; }}",
        config.path_duration_secs
    );
    let _ = writeln!(
        &mut css,
        ".{BUBBLE_CLASS} {{ animation: bubbleRise {}s ease-in infinite; }}",
        config.bubble_duration_secs
    );
    css.push_str("@keyframes bubbleRise {\n");
    css.push_str("  0% { opacity: 0.6; transform: translate(0, 0); }\n");
    css.push_str("  100% { opacity: 0; transform: translate(0, -12px); }\n");
    css.push_str("}\n");
    css
}

/// Append `<g id="sub">` holding the hull, fittings and bubbles.
pub fn write_submarine(out: &mut String, config: &GridConfig) {
    let _ = write!(out, r#"<g id="{SUB_ID}">"#);

    // hull
    let _ = write!(out, r#"<ellipse cx="20" cy="10" rx="18" ry="8" fill="{HULL}"/>"#);

    // propeller
    out.push_str(r##"<rect x="1" y="7" width="2" height="6" rx="1" fill="#888"/>"##);
    out.push_str(r##"<circle cx="2" cy="10" r="1.5" fill="#aaa"/>"##);

    // tail fins
    let _ = write!(out, r#"<polygon points="2,5 0,3 2,3" fill="{FIN}"/>"#);
    let _ = write!(out, r#"<polygon points="2,15 0,17 2,17" fill="{FIN}"/>"#);

    // periscope
    let _ = write!(out, r#"<rect x="28" y="-5" width="2" height="10" fill="{FIN}"/>"#);
    let _ = write!(out, r#"<rect x="26" y="-7" width="6" height="2" fill="{FIN}"/>"#);

    for cx in [14, 20, 26] {
        let _ = write!(out, r#"<circle cx="{cx}" cy="10" r="2" fill="{WINDOW}"/>"#);
    }

    for i in 0..config.bubble_count {
        let cx = -5 - 6 * i as i64;
        let _ = write!(
            out,
            r#"<circle cx="{cx}" cy="10" r="2" fill="white" opacity="0.5" class="{BUBBLE_CLASS}"/>"#
        );
    }

    out.push_str("</g>");
}

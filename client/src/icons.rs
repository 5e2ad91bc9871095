use leptos::prelude::*;
use moonmap_shared::IconKey;

pub const GLYPH_SIZE_PX: u32 = 24;

pub fn icon_src(icon: IconKey) -> &'static str {
    match icon {
        IconKey::Scroll => "/icons/tied-scroll.svg",
        IconKey::ScenicSpot => "/icons/camera.svg",
        IconKey::Butterfly => "/icons/butterfly.svg",
    }
}

/// Inline glyph for a toggle row or a map marker.
#[component]
pub fn IconGlyph(icon: IconKey, #[prop(default = GLYPH_SIZE_PX)] size: u32) -> impl IntoView {
    view! {
        <img
            src=icon_src(icon)
            alt=icon.as_str()
            width=size.to_string()
            height=size.to_string()
            draggable="false"
            style="display: block; pointer-events: none; user-select: none;"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_distinct_svg() {
        let mut seen = std::collections::HashSet::new();
        for icon in IconKey::ALL {
            let src = icon_src(icon);
            assert!(src.starts_with("/icons/") && src.ends_with(".svg"));
            assert!(seen.insert(src), "duplicate asset {src}");
        }
    }

    #[test]
    fn every_icon_asset_ships() {
        for icon in IconKey::ALL {
            let path = crate::config::public_asset(icon_src(icon));
            assert!(path.is_file(), "missing glyph {}", path.display());
        }
    }
}

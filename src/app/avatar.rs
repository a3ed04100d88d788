use leptos::prelude::*;

const DEFAULT_ROTATION: &str = "-2deg";

/// CSS transform for the sticker tilt. A blank rotation keeps the default tilt.
pub fn sticker_transform(rotation: &str) -> String {
    let rotation = rotation.trim();
    let rotation = if rotation.is_empty() {
        DEFAULT_ROTATION
    } else {
        rotation
    };
    format!("rotate({rotation})")
}

/// Round memoji portrait styled like a slightly tilted glossy sticker.
#[component]
pub fn AvatarSticker(
    #[prop(into)] width: String,
    #[prop(into)] height: String,
    /// Forwarded to the image `sizes` attribute.
    #[prop(into)]
    image_sizes: String,
    #[prop(into, default = "4px".to_string())] border_width: String,
    #[prop(into, default = DEFAULT_ROTATION.to_string())] rotation: String,
) -> impl IntoView {
    view! {
        <div
            class="relative shrink-0"
            style:width=width
            style:height=height
            style:transform=sticker_transform(&rotation)
        >
            <div class="sticker-gloss relative h-full w-full rounded-full p-[2px]">
                <div
                    class="relative h-full w-full overflow-hidden rounded-full border-solid border-white bg-forest-300 bg-[url(/images/backgrounds/topography-forest.svg)]"
                    style:border-width=border_width
                >
                    <img
                        src="/images/memoji.svg"
                        sizes=image_sizes
                        alt=""
                        class="absolute inset-0 h-full w-full object-cover"
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_transform() {
        assert_eq!(sticker_transform("-2deg"), "rotate(-2deg)");
        assert_eq!(sticker_transform(" 5deg "), "rotate(5deg)");
        assert_eq!(sticker_transform(""), "rotate(-2deg)");
    }
}

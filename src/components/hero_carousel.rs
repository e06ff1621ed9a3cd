use yew::prelude::*;

use crate::hooks::use_carousel;
use crate::utils::constants::HERO_ROTATION_MS;

#[derive(Properties, PartialEq)]
pub struct HeroCarouselProps {
    /// Fondos que rotan detrás del copy del hero
    pub images: Vec<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &HeroCarouselProps) -> Html {
    let carousel = use_carousel(props.images.len(), HERO_ROTATION_MS);

    let background = props
        .images
        .get(carousel.index)
        .map(|url| format!("background-image: url('{}')", url))
        .unwrap_or_default();

    html! {
        <section class="hero" style={background}>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                { props.children.clone() }
            </div>

            if props.images.len() > 1 {
                <div class="hero-dots">
                    { for (0..props.images.len()).map(|i| {
                        let jump = carousel.jump.clone();
                        html! {
                            <button
                                class={classes!("hero-dot", (i == carousel.index).then_some("active"))}
                                onclick={Callback::from(move |_| jump.emit(i))}
                            />
                        }
                    })}
                </div>
            }
        </section>
    }
}

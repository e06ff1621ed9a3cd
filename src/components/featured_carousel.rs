use yew::prelude::*;

use crate::components::PropertyCard;
use crate::hooks::use_carousel;
use crate::models::Property;
use crate::utils::constants::FEATURED_ROTATION_MS;

#[derive(Properties, PartialEq)]
pub struct FeaturedCarouselProps {
    pub properties: Vec<Property>,
}

/// Carrusel de propiedades destacadas. Rota solo; el hover lo pausa y
/// los dots saltan directo a un slide re-armando el timer.
#[function_component(FeaturedCarousel)]
pub fn featured_carousel(props: &FeaturedCarouselProps) -> Html {
    let carousel = use_carousel(props.properties.len(), FEATURED_ROTATION_MS);

    if props.properties.is_empty() {
        return html! {};
    }

    let on_mouse_enter = {
        let pause = carousel.pause.clone();
        Callback::from(move |_: MouseEvent| pause.emit(()))
    };

    let on_mouse_leave = {
        let resume = carousel.resume.clone();
        Callback::from(move |_: MouseEvent| resume.emit(()))
    };

    html! {
        <div
            class="featured-carousel"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
        >
            {
                if let Some(current) = props.properties.get(carousel.index) {
                    html! { <PropertyCard property={current.clone()} /> }
                } else {
                    html! {}
                }
            }

            <div class="carousel-dots">
                { for (0..props.properties.len()).map(|i| {
                    let jump = carousel.jump.clone();
                    html! {
                        <button
                            class={classes!("carousel-dot", (i == carousel.index).then_some("active"))}
                            onclick={Callback::from(move |_| jump.emit(i))}
                        />
                    }
                })}
            </div>
        </div>
    }
}

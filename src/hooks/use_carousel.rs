use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::state::Carousel;

#[derive(Clone)]
pub struct UseCarouselHandle {
    pub index: usize,
    pub jump: Callback<usize>,
    pub pause: Callback<()>,
    pub resume: Callback<()>,
}

/// Rotador con timer propio. El `Interval` vive dentro del effect y se
/// cancela en el cleanup (unmount o re-armado): nunca quedan timers sueltos.
#[hook]
pub fn use_carousel(len: usize, interval_ms: u32) -> UseCarouselHandle {
    // El estado real vive en un Rc<RefCell> para que el closure del timer
    // siempre vea el valor vigente, no una copia del render que lo creó
    let state = use_mut_ref(|| Carousel::new(len));
    let redraw = use_force_update();

    // Un salto manual re-arma el timer cambiando de epoch
    let epoch = use_state(|| 0u32);

    // La secuencia puede cambiar de largo (item-count responsivo)
    {
        let state = state.clone();
        let redraw = redraw.clone();
        use_effect_with(len, move |len| {
            state.borrow_mut().resize(*len);
            redraw.force_update();
            || ()
        });
    }

    {
        let state = state.clone();
        let redraw = redraw.clone();
        use_effect_with((len, *epoch, interval_ms), move |(len, _, interval_ms)| {
            let interval = if *len > 1 {
                let interval_ms = *interval_ms;
                Some(Interval::new(interval_ms, move || {
                    state.borrow_mut().tick();
                    redraw.force_update();
                }))
            } else {
                None
            };

            move || drop(interval)
        });
    }

    let jump = {
        let state = state.clone();
        let epoch = epoch.clone();
        let redraw = redraw.clone();
        Callback::from(move |index: usize| {
            state.borrow_mut().jump_to(index);
            // Re-armar el timer para que el próximo tick cuente desde ahora
            epoch.set(*epoch + 1);
            redraw.force_update();
        })
    };

    let pause = {
        let state = state.clone();
        Callback::from(move |_| {
            state.borrow_mut().pause();
        })
    };

    let resume = {
        let state = state.clone();
        Callback::from(move |_| {
            state.borrow_mut().resume();
        })
    };

    let index = state.borrow().index();

    UseCarouselHandle {
        index,
        jump,
        pause,
        resume,
    }
}

use yew::prelude::*;

use crate::models::SessionUser;
use crate::stores::SessionStore;

pub struct UseSessionHandle {
    pub user: Option<SessionUser>,
    pub store: SessionStore,
    pub sign_in: Callback<SessionUser>,
    pub sign_out: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Acceso a la sesión desde cualquier componente. Se suscribe al store y
/// re-renderiza al iniciar/cerrar sesión, sin recargar la página.
#[hook]
pub fn use_session() -> UseSessionHandle {
    let store = use_context::<SessionStore>().expect("SessionStore context not found");
    let user = use_state(|| store.current());

    // Subscribe on mount, unsubscribe on unmount
    {
        let store = store.clone();
        let user = user.clone();
        use_effect_with((), move |_| {
            let id = {
                let user = user.clone();
                store.subscribe(move |current| user.set(current))
            };
            move || store.unsubscribe(id)
        });
    }

    let sign_in = {
        let store = store.clone();
        Callback::from(move |new_user: SessionUser| {
            store.sign_in(new_user);
        })
    };

    let sign_out = {
        let store = store.clone();
        Callback::from(move |_| {
            store.sign_out();
        })
    };

    UseSessionHandle {
        user: (*user).clone(),
        store,
        sign_in,
        sign_out,
    }
}

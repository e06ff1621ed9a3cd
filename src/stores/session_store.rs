// ============================================================================
// SESSION STORE - estado observable del usuario autenticado
// ============================================================================
// Un solo contenedor pub/sub en vez de eventos globales ad-hoc: el navbar
// (o cualquier componente) se suscribe y reacciona a login/logout sin
// acoplarse a quién disparó el cambio.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::SessionUser;
use crate::utils::constants::STORAGE_KEY_SESSION_USER;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

type Subscriber = Box<dyn Fn(Option<SessionUser>)>;

struct Inner {
    user: RefCell<Option<SessionUser>>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
    next_id: Cell<usize>,
}

/// Store observable del SessionUser. Clonarlo comparte estado y subscribers.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                user: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Store inicial con el usuario persistido en localStorage, si existe.
    /// El registro cacheado es advisory: no se valida contra el servidor.
    pub fn hydrate() -> Self {
        let store = Self::new();
        if let Some(user) = load_from_storage::<SessionUser>(STORAGE_KEY_SESSION_USER) {
            log::info!("✅ Sesión restaurada desde localStorage: {}", user.email);
            *store.inner.user.borrow_mut() = Some(user);
        }
        store
    }

    /// Snapshot del usuario actual (puede no haber ninguno)
    pub fn current(&self) -> Option<SessionUser> {
        self.inner.user.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.user.borrow().is_some()
    }

    /// Suscribirse a cambios de sesión. Devuelve un id para desuscribirse.
    pub fn subscribe<F>(&self, callback: F) -> usize
    where
        F: Fn(Option<SessionUser>) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(sub_id, _)| *sub_id != id);
    }

    /// Login exitoso: persistir y notificar
    pub fn sign_in(&self, user: SessionUser) {
        if let Err(e) = save_to_storage(STORAGE_KEY_SESSION_USER, &user) {
            log::error!("❌ Error guardando sesión: {}", e);
        }
        log::info!("✅ Sesión iniciada: {}", user.email);
        self.set(Some(user));
    }

    /// Logout: borrar el registro persistido y notificar
    pub fn sign_out(&self) {
        let _ = remove_from_storage(STORAGE_KEY_SESSION_USER);
        log::info!("👋 Sesión cerrada");
        self.set(None);
    }

    fn set(&self, user: Option<SessionUser>) {
        *self.inner.user.borrow_mut() = user;
        self.notify();
    }

    fn notify(&self) {
        let current = self.current();
        for (_, callback) in self.inner.subscribers.borrow().iter() {
            callback(current.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            email: "ana@realvista.app".to_string(),
            name: "Ana".to_string(),
            avatar: None,
            token: "tok".to_string(),
            is_logged_in: true,
        }
    }

    #[test]
    fn subscribers_see_login_and_logout() {
        let store = SessionStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        {
            let seen = seen.clone();
            store.subscribe(move |u| seen.borrow_mut().push(u.map(|u| u.email)));
        }

        store.set(Some(user()));
        store.set(None);

        assert_eq!(
            *seen.borrow(),
            vec![Some("ana@realvista.app".to_string()), None]
        );
    }

    #[test]
    fn clones_share_state_and_subscribers() {
        let store = SessionStore::new();
        let clone = store.clone();
        let count = Rc::new(Cell::new(0));

        {
            let count = count.clone();
            clone.subscribe(move |_| count.set(count.get() + 1));
        }

        store.set(Some(user()));
        assert_eq!(count.get(), 1);
        assert!(clone.is_logged_in());
        assert_eq!(clone.current().unwrap().email, "ana@realvista.app");
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = SessionStore::new();
        let count = Rc::new(Cell::new(0));

        let id = {
            let count = count.clone();
            store.subscribe(move |_| count.set(count.get() + 1))
        };

        store.set(Some(user()));
        store.unsubscribe(id);
        store.set(None);

        assert_eq!(count.get(), 1);
    }
}

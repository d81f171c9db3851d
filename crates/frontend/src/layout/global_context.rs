use contracts::domain::common::{RegistrationKind, RegistrationRecord};
use contracts::shared::config::ClientConfig;
use leptos::prelude::*;

/// What the single content area is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Registration(RegistrationKind),
    /// Read-only view of a record handed over by a form screen
    Tracking {
        kind: RegistrationKind,
        record: RegistrationRecord,
    },
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub screen: RwSignal<Screen>,
    pub config: RwSignal<ClientConfig>,
    pub config_ready: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            screen: RwSignal::new(Screen::Home),
            config: RwSignal::new(ClientConfig::default()),
            config_ready: RwSignal::new(false),
        }
    }

    pub fn open_home(&self) {
        log::debug!("navigate: home");
        self.screen.set(Screen::Home);
    }

    pub fn open_registration(&self, kind: RegistrationKind) {
        log::debug!("navigate: {} registration", kind.index());
        self.screen.set(Screen::Registration(kind));
    }

    pub fn open_tracking(&self, kind: RegistrationKind, record: RegistrationRecord) {
        log::debug!("navigate: {} tracking, record id {:?}", kind.index(), record.id());
        self.screen.set(Screen::Tracking { kind, record });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

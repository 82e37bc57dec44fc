#[path = "subscription.rs"]
pub(crate) mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::AppConfig;
use crate::layout::ChatLayout;
use crate::route::Route;
use crate::store::{
    FetchTicket, JsonSessionService, Session, SessionId, SessionService,
    SessionStore,
};
use crate::theme::AppTheme;
use crate::widgets::Widgets;
use crate::widgets::session_panel::SessionPanelEvent;

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

const APP_TITLE: &str = "Recall";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Session panel widget
    SessionPanel(SessionPanelEvent),
    // Service completions
    SessionsFetched {
        ticket: FetchTicket,
        result: Result<Vec<Session>, String>,
    },
    SessionDeleted {
        id: SessionId,
        result: Result<(), String>,
    },
    // Navigation
    OpenHistory,
    // Direct operations
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) service: Arc<dyn SessionService>,
    pub(crate) store: SessionStore,
    pub(crate) layout: ChatLayout,
    pub(crate) route: Route,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = AppConfig::load();
        let service = JsonSessionService::new(config.sessions_path.clone());
        log::info!("reading sessions from {}", service.path().display());

        let app = Self::with_service(config, Arc::new(service));
        (app, Task::done(AppEvent::IcedReady))
    }

    /// Build the app around an explicit session service.
    pub(crate) fn with_service(
        config: AppConfig,
        service: Arc<dyn SessionService>,
    ) -> Self {
        let window_size =
            Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        let layout = ChatLayout::new(window_size, config.wide_layout_min_width);

        Self {
            theme: AppTheme::default(),
            service,
            store: SessionStore::new(),
            layout,
            route: Route::Dashboard,
            widgets: Widgets::default(),
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.route.active_session_id() {
            Some(id) => match self.store.session(id) {
                Some(session) => format!("{APP_TITLE} - {}", session.title()),
                None => String::from(APP_TITLE),
            },
            None => String::from(APP_TITLE),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

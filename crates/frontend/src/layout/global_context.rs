use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Orders,
    UploadData,
    ExportReport,
    Users,
    Vendors,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Orders => "Orders",
            Page::UploadData => "Upload Data",
            Page::ExportReport => "Export Report",
            Page::Users => "User Management",
            Page::Vendors => "Vendors",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    pub is_error: bool,
}

/// App-global state shared through context. Owned by the app shell for
/// the lifetime of the mounted application.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub toast: RwSignal<Option<Toast>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Overview),
            toast: RwSignal::new(None),
        }
    }

    pub fn show_message(&self, text: &str) {
        self.push_toast(text, false);
    }

    pub fn show_error(&self, text: &str) {
        log::error!("{}", text);
        self.push_toast(text, true);
    }

    fn push_toast(&self, text: &str, is_error: bool) {
        let toast = Toast {
            text: text.to_string(),
            is_error,
        };
        self.toast.set(Some(toast.clone()));
        let signal = self.toast;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            // Only dismiss if a newer toast has not replaced this one.
            signal.update(|current| {
                if current.as_ref() == Some(&toast) {
                    *current = None;
                }
            });
        });
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

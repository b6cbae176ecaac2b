//! Async driver coupling an [`App`] with a [`BibleApi`]

use crate::api::BibleApi;
use crate::state::{Action, App, Completion, Request};

/// Perform one request against the API
pub async fn execute<A: BibleApi + ?Sized>(api: &A, request: Request) -> Completion {
    match request {
        Request::Translations { ticket } => Completion::Translations {
            ticket,
            result: api.translations().await,
        },
        Request::Books {
            ticket,
            translation,
        } => Completion::Books {
            ticket,
            result: api.books(&translation).await,
        },
        Request::Chapter {
            ticket,
            translation,
            book_id,
            chapter,
        } => Completion::Chapter {
            ticket,
            result: api.chapter(&translation, &book_id, chapter).await,
        },
        Request::Search {
            ticket,
            translation,
            query,
            limit,
        } => Completion::Search {
            ticket,
            result: api.search(&translation, &query, limit).await,
        },
    }
}

/// An [`App`] whose requests are carried out against `api`
///
/// Every operation returns once the app has no request left in flight.
pub struct Session<A> {
    api: A,
    app: App,
}

impl<A: BibleApi> Session<A> {
    pub fn new(api: A, app: App) -> Self {
        Self { api, app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the translation list and whatever the current location needs
    pub async fn start(&mut self) {
        self.app.start();
        self.run().await;
    }

    pub async fn dispatch(&mut self, action: Action) {
        self.app.apply(action);
        self.run().await;
    }

    /// Execute queued requests until the app is quiescent
    pub async fn run(&mut self) {
        loop {
            let requests = self.app.drain_requests();
            if requests.is_empty() {
                break;
            }
            for request in requests {
                tracing::debug!("executing {}", request);
                let completion = execute(&self.api, request).await;
                self.app.complete(completion);
            }
        }
    }

    pub fn into_app(self) -> App {
        self.app
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_stack::NoticeStack;
use crate::config::ClientConfig;
use crate::net::AppGateway;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    client::ClientPage,
    dashboard::DashboardPage,
    home::HomePage,
    login::LoginPage,
    people::{ClientsPage, GuardsPage},
    profile::ProfilePage,
    reports::ReportsPage,
    reservations::ReservationsPage,
    spaces::SpacesPage,
    statistics::StatisticsPage,
};
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;
use crate::state::session::SessionStore;
use crate::util::notify::Notifier;

/// Root application component.
///
/// Builds the session-aware gateway once and provides it, the config, the
/// auth signal and the notifier to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionStore::for_environment();
    let gateway = AppGateway::new(config.api_base.clone(), session.clone(), BrowserTransport);
    log::info!("parkspot client using API at {}", config.api_base);

    let auth = RwSignal::new(AuthState::from_session(&session));
    let notices = RwSignal::new(NoticeState::default());
    let notifier = Notifier::new(notices, auth, config.notice_ttl);

    provide_context(config);
    provide_context(gateway);
    provide_context(auth);
    provide_context(notices);
    provide_context(notifier);

    view! {
        <Title text="ParkSpot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("cliente") view=ClientPage/>
                <Route path=StaticSegment("spaces") view=SpacesPage/>
                <Route path=StaticSegment("reservations") view=ReservationsPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
                <Route path=StaticSegment("clients") view=ClientsPage/>
                <Route path=StaticSegment("guards") view=GuardsPage/>
                <Route path=StaticSegment("statistics") view=StatisticsPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
        <NoticeStack/>
    }
}

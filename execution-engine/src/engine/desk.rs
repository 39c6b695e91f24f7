use crate::engine::campaign::CampaignRunner;
use crate::event_log::EventLog;
use crate::models::CampaignReport;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use trading::{Broker, Credentials, GatewayError, RiskSettings, TradingSession};

/// What the operator UI drives: one session handle, the current settings,
/// the trading toggle and the event log.
///
/// Turning trading off only flips the flag. A campaign that already started
/// runs to completion.
pub struct TradingDesk<S: TradingSession + 'static> {
    session: Option<Arc<S>>,
    settings: RiskSettings,
    runner: Arc<CampaignRunner>,
    log: EventLog,
    trading: AtomicBool,
    active_runs: Arc<AtomicUsize>,
}

/// Decrements the run counter even if the campaign task panics.
struct RunGuard(Arc<AtomicUsize>);

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<S: TradingSession + 'static> TradingDesk<S> {
    pub fn new(runner: CampaignRunner, settings: RiskSettings) -> Self {
        Self::with_event_log(runner, settings, EventLog::new())
    }

    /// Builds a desk that appends to an existing log.
    pub fn with_event_log(runner: CampaignRunner, settings: RiskSettings, log: EventLog) -> Self {
        Self {
            session: None,
            settings,
            runner: Arc::new(runner),
            log,
            trading: AtomicBool::new(false),
            active_runs: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Opens a session through `broker` and keeps it for later campaigns.
    pub async fn connect<B>(
        &mut self,
        broker: &B,
        credentials: &Credentials,
    ) -> Result<(), GatewayError>
    where
        B: Broker<Session = S>,
    {
        self.log.info("Connecting to trading session...");
        match broker.connect(credentials).await {
            Ok(session) => {
                self.session = Some(Arc::new(session));
                self.log.info("Connected to trading session successfully");
                Ok(())
            }
            Err(e) => {
                self.log.error(format!("Error connecting to trading session: {}", e));
                Err(e)
            }
        }
    }

    /// Uses an already established session.
    pub fn attach(&mut self, session: Arc<S>) {
        self.session = Some(session);
    }

    pub fn session(&self) -> Option<&Arc<S>> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_connected())
    }

    /// Replaces the settings used by the next campaign.
    pub fn save_settings(&mut self, settings: RiskSettings) {
        self.log.info(format!("Settings saved: {}", settings.summary()));
        self.settings = settings;
    }

    pub fn settings(&self) -> &RiskSettings {
        &self.settings
    }

    /// Flips the trading flag.
    ///
    /// Off -> on starts exactly one campaign on the current runtime and
    /// returns its handle. On -> off returns `None` and leaves any running
    /// campaign alone.
    pub fn toggle(&self) -> Option<JoinHandle<CampaignReport>> {
        let was_trading = self.trading.fetch_xor(true, Ordering::SeqCst);
        if was_trading {
            self.log.info("Trading stopped.");
            return None;
        }

        self.log.info("Trading started...");
        self.active_runs.fetch_add(1, Ordering::SeqCst);
        let guard = RunGuard(self.active_runs.clone());

        let runner = self.runner.clone();
        let session = self.session.clone();
        let settings = self.settings.clone();
        let log = self.log.clone();

        Some(tokio::spawn(async move {
            let _guard = guard;
            runner.run(session.as_deref(), &settings, &log).await
        }))
    }

    /// The toggle state shown to the operator.
    pub fn is_trading(&self) -> bool {
        self.trading.load(Ordering::SeqCst)
    }

    /// Whether any campaign task is still in flight.
    pub fn is_campaign_running(&self) -> bool {
        self.active_runs.load(Ordering::SeqCst) > 0
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// Closes and drops the session.
    pub async fn disconnect(&mut self) {
        if let Some(session) = self.session.take() {
            session.close().await;
            self.log.info("Disconnected from trading session");
        }
    }
}

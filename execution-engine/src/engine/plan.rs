use trading::{Direction, OrderPlan, Quote, RiskSettings};

/// Derives stop-loss, take-profit and size for one batch.
///
/// Long entries are priced off the ask, short entries off the bid. The
/// take-profit distance is the stop-loss distance times the multiplier.
/// Size is `trade_size` as configured; `risk_per_trade_percent` plays no part.
/// Inputs are not validated.
pub fn compute_plan(direction: Direction, quote: &Quote, settings: &RiskSettings) -> OrderPlan {
    let sl_frac = settings.stop_loss_percent() / 100.0;
    let tp_frac = sl_frac * settings.take_profit_multiplier();

    let (stop_loss, take_profit) = match direction {
        Direction::Long => (quote.ask() * (1.0 - sl_frac), quote.ask() * (1.0 + tp_frac)),
        Direction::Short => (quote.bid() * (1.0 + sl_frac), quote.bid() * (1.0 - tp_frac)),
    };

    OrderPlan::new(direction, stop_loss, take_profit, settings.trade_size())
}

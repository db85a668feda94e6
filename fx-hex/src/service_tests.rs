//! Service unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use fx_types::{
        AppError, ConversionLedger, ConversionRecord, CurrencyCode, CurrencySelection,
        ExchangeError, LEDGER_CAPACITY, LatestRate, LedgerError, RateClient, RecordId, TrendPoint,
    };

    use crate::{ConversionService, CurrencyCatalog, FxServices, TrendQuery};

    /// Scripted rate client that counts every provider call.
    pub struct FakeRates {
        latest: Option<LatestRate>,
        range: Vec<TrendPoint>,
        currencies: Option<Vec<CurrencySelection>>,
        calls: AtomicUsize,
    }

    impl FakeRates {
        pub fn new() -> Self {
            Self {
                latest: None,
                range: Vec::new(),
                currencies: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_latest(mut self, rate: Decimal, date: NaiveDate) -> Self {
            self.latest = Some(LatestRate { rate, date });
            self
        }

        pub fn with_range(mut self, points: Vec<TrendPoint>) -> Self {
            self.range = points;
            self
        }

        pub fn with_currencies(mut self, currencies: Vec<CurrencySelection>) -> Self {
            self.currencies = Some(currencies);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateClient for FakeRates {
        async fn fetch_currencies(&self) -> Result<Vec<CurrencySelection>, ExchangeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.currencies
                .clone()
                .ok_or_else(|| ExchangeError::CurrencyListUnavailable("offline".into()))
        }

        async fn latest_rate(
            &self,
            base: &CurrencyCode,
            target: &CurrencyCode,
        ) -> Result<LatestRate, ExchangeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.latest.ok_or_else(|| ExchangeError::RateUnavailable {
                base: base.clone(),
                target: target.clone(),
                reason: "no rate scripted".into(),
            })
        }

        async fn range_rates(
            &self,
            _base: &CurrencyCode,
            _target: &CurrencyCode,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<TrendPoint>, ExchangeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.range.clone())
        }
    }

    /// In-memory ledger with the same retention rule as the SQLite adapter.
    pub struct MemoryLedger {
        rows: Mutex<Vec<(i64, ConversionRecord)>>,
        next_id: AtomicUsize,
    }

    impl MemoryLedger {
        pub fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                next_id: AtomicUsize::new(1),
            }
        }
    }

    #[async_trait]
    impl ConversionLedger for MemoryLedger {
        async fn insert(&self, record: &ConversionRecord) -> Result<RecordId, LedgerError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
            let mut rows = self.rows.lock().unwrap();
            rows.push((id, record.clone()));
            let excess = rows.len().saturating_sub(LEDGER_CAPACITY);
            rows.drain(..excess);
            Ok(RecordId::new(id))
        }

        async fn list_recent(&self) -> Result<Vec<ConversionRecord>, LedgerError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().rev().map(|(_, r)| r.clone()).collect())
        }
    }

    /// Ledger whose storage is always broken.
    pub struct BrokenLedger;

    #[async_trait]
    impl ConversionLedger for BrokenLedger {
        async fn insert(&self, _record: &ConversionRecord) -> Result<RecordId, LedgerError> {
            Err(LedgerError::Database("disk I/O error".into()))
        }

        async fn list_recent(&self) -> Result<Vec<ConversionRecord>, LedgerError> {
            Err(LedgerError::Database("disk I/O error".into()))
        }
    }

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usd_inr() -> FakeRates {
        FakeRates::new().with_latest(dec!(83.0), date(2024, 6, 1))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // ConversionService
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_convert_usd_to_inr() {
        let service = ConversionService::new(Arc::new(usd_inr()), MemoryLedger::new());

        let record = service
            .convert(&code("USD"), &code("INR"), dec!(2.0))
            .await
            .unwrap();

        assert_eq!(record.amount(), dec!(2.0));
        assert_eq!(record.converted_amount(), dec!(166.0));
        assert_eq!(record.rate(), dec!(83.0));
        assert_eq!(record.date(), date(2024, 6, 1));

        let recent = service.recent().await.unwrap();
        assert_eq!(recent.first(), Some(&record));
    }

    #[tokio::test]
    async fn test_convert_uses_provider_date() {
        let rates = FakeRates::new().with_latest(dec!(0.9215), date(1999, 1, 4));
        let service = ConversionService::new(Arc::new(rates), MemoryLedger::new());

        let record = service
            .convert(&code("USD"), &code("EUR"), dec!(10))
            .await
            .unwrap();

        assert_eq!(record.date(), date(1999, 1, 4));
        assert_eq!(record.converted_amount(), dec!(9.215));
    }

    #[tokio::test]
    async fn test_convert_product_is_exact() {
        let rates = FakeRates::new().with_latest(dec!(1.0873), date(2024, 6, 1));
        let service = ConversionService::new(Arc::new(rates), MemoryLedger::new());

        for amount in [dec!(0), dec!(0.5), dec!(3), dec!(1234.56)] {
            let record = service
                .convert(&code("EUR"), &code("USD"), amount)
                .await
                .unwrap();
            assert_eq!(record.converted_amount(), amount * dec!(1.0873));
        }
    }

    #[tokio::test]
    async fn test_convert_negative_amount_skips_provider() {
        let rates = Arc::new(usd_inr());
        let service = ConversionService::new(rates.clone(), MemoryLedger::new());

        let result = service.convert(&code("USD"), &code("INR"), dec!(-1)).await;

        assert!(matches!(result, Err(AppError::InvalidAmount(_))));
        assert_eq!(rates.calls(), 0);
        assert!(service.recent().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_convert_rate_unavailable_records_nothing() {
        let service = ConversionService::new(Arc::new(FakeRates::new()), MemoryLedger::new());

        let result = service.convert(&code("USD"), &code("XYZ"), dec!(1)).await;

        assert!(matches!(result, Err(AppError::RateUnavailable(_))));
        assert!(service.recent().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_convert_same_currency() {
        let rates = FakeRates::new().with_latest(dec!(1), date(2024, 6, 1));
        let service = ConversionService::new(Arc::new(rates), MemoryLedger::new());

        let record = service
            .convert(&code("EUR"), &code("EUR"), dec!(42))
            .await
            .unwrap();

        assert_eq!(record.converted_amount(), dec!(42));
    }

    #[tokio::test]
    async fn test_convert_duplicates_recorded() {
        let service = ConversionService::new(Arc::new(usd_inr()), MemoryLedger::new());

        for _ in 0..2 {
            service
                .convert(&code("USD"), &code("INR"), dec!(1))
                .await
                .unwrap();
        }

        assert_eq!(service.recent().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_convert_storage_failure_propagates() {
        let service = ConversionService::new(Arc::new(usd_inr()), BrokenLedger);

        let result = service.convert(&code("USD"), &code("INR"), dec!(1)).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_history_keeps_ten_newest() {
        let service = ConversionService::new(Arc::new(usd_inr()), MemoryLedger::new());

        for amount in 1..=12 {
            service
                .convert(&code("USD"), &code("INR"), Decimal::from(amount))
                .await
                .unwrap();
        }

        let amounts: Vec<Decimal> = service
            .recent()
            .await
            .unwrap()
            .iter()
            .map(|r| r.amount())
            .collect();
        let expected: Vec<Decimal> = (3..=12).rev().map(Decimal::from).collect();
        assert_eq!(amounts, expected);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // TrendQuery
    // ─────────────────────────────────────────────────────────────────────────

    fn points() -> Vec<TrendPoint> {
        vec![
            TrendPoint {
                date: date(2024, 1, 2),
                rate: dec!(83.21),
            },
            TrendPoint {
                date: date(2024, 1, 3),
                rate: dec!(83.25),
            },
        ]
    }

    #[tokio::test]
    async fn test_trend_returns_points_unmodified() {
        let query = TrendQuery::new(Arc::new(FakeRates::new().with_range(points())));

        let trend = query
            .fetch_trend(&code("USD"), &code("INR"), date(2024, 1, 1), date(2024, 1, 5))
            .await
            .unwrap();

        assert_eq!(trend.points, points());
        assert_eq!(trend.start, date(2024, 1, 1));
        assert_eq!(trend.end, date(2024, 1, 5));
    }

    #[tokio::test]
    async fn test_trend_equal_dates_rejected() {
        let rates = Arc::new(FakeRates::new().with_range(points()));
        let query = TrendQuery::new(rates.clone());

        let result = query
            .fetch_trend(&code("USD"), &code("INR"), date(2024, 1, 1), date(2024, 1, 1))
            .await;

        assert!(matches!(result, Err(AppError::InvalidDateRange { .. })));
        assert_eq!(rates.calls(), 0);
    }

    #[tokio::test]
    async fn test_trend_reversed_dates_rejected() {
        let rates = Arc::new(FakeRates::new().with_range(points()));
        let query = TrendQuery::new(rates.clone());

        let result = query
            .fetch_trend(&code("USD"), &code("INR"), date(2024, 2, 1), date(2024, 1, 1))
            .await;

        assert!(matches!(result, Err(AppError::InvalidDateRange { .. })));
        assert_eq!(rates.calls(), 0);
    }

    #[tokio::test]
    async fn test_trend_empty_range_unavailable() {
        let query = TrendQuery::new(Arc::new(FakeRates::new()));

        let result = query
            .fetch_trend(&code("USD"), &code("INR"), date(2024, 1, 1), date(2024, 1, 5))
            .await;

        assert!(matches!(result, Err(AppError::RangeUnavailable(_))));
    }

    #[tokio::test]
    async fn test_trend_not_cached() {
        let rates = Arc::new(FakeRates::new().with_range(points()));
        let query = TrendQuery::new(rates.clone());

        for _ in 0..3 {
            query
                .fetch_trend(&code("USD"), &code("INR"), date(2024, 1, 1), date(2024, 1, 5))
                .await
                .unwrap();
        }

        assert_eq!(rates.calls(), 3);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // CurrencyCatalog
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_catalog_live() {
        let rates = FakeRates::new()
            .with_currencies(vec![CurrencySelection::new(code("EUR"), "Euro")]);
        let catalog = CurrencyCatalog::new(Arc::new(rates));

        let listing = catalog.list().await;

        assert!(!listing.is_fallback());
        assert_eq!(listing.currencies().len(), 1);
    }

    #[tokio::test]
    async fn test_catalog_fallback() {
        let catalog = CurrencyCatalog::new(Arc::new(FakeRates::new()));

        let listing = catalog.list().await;

        assert!(listing.is_fallback());
        assert!(listing.find(&code("CHF")).is_some());
    }

    #[tokio::test]
    async fn test_default_pair() {
        let catalog = CurrencyCatalog::new(Arc::new(FakeRates::new()));

        assert_eq!(catalog.default_pair(), (code("USD"), code("INR")));
    }

    #[tokio::test]
    async fn test_services_share_rate_client() {
        let services = FxServices::new(usd_inr().with_range(points()), MemoryLedger::new());

        services
            .conversions
            .convert(&code("USD"), &code("INR"), dec!(1))
            .await
            .unwrap();
        let trend = services
            .trends
            .fetch_trend(&code("USD"), &code("INR"), date(2024, 1, 1), date(2024, 1, 5))
            .await
            .unwrap();

        assert_eq!(trend.points.len(), 2);
        assert_eq!(services.conversions.ledger().list_recent().await.unwrap().len(), 1);
    }
}

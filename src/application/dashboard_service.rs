// Dashboard service - one render pass per request
use crate::application::prediction_service::PredictionService;
use crate::domain::dashboard::{ChartView, DashboardView, MapView};
use crate::domain::session::Session;
use crate::domain::timeseries::TimeSeriesSample;
use crate::infrastructure::random::ThreadRandom;

#[derive(Clone)]
pub struct DashboardService {
    predictions: PredictionService,
}

impl DashboardService {
    pub fn new(predictions: PredictionService) -> Self {
        Self { predictions }
    }

    /// Runs any pending fetch, then builds the view for the session's
    /// current state. Fetch failures are recorded on the session and shown
    /// inline; they never fail the render itself, and a previously fetched
    /// table stays visible.
    pub async fn render(&self, session: &mut Session) -> DashboardView {
        if session.fetch_requested {
            session.fetch_requested = false;
            match self.predictions.refresh(&session.params).await {
                Ok(table) => {
                    session.predictions = Some(table);
                    session.last_error = None;
                }
                Err(e) => {
                    tracing::warn!("prediction refresh failed: {}", e);
                    session.last_error = Some(e.to_string());
                }
            }
        }

        match &session.predictions {
            Some(table) => {
                let mut rng = ThreadRandom::default();
                // The chart sample is simulated and regenerated every render.
                let sample = TimeSeriesSample::generate(
                    session.params.start_date,
                    session.params.end_date,
                    &mut rng,
                );
                DashboardView::Dashboard {
                    params: session.params,
                    map: MapView::from_table(table),
                    chart: ChartView::from_sample(table, sample),
                    last_error: session.last_error.clone(),
                }
            }
            None => DashboardView::Prompt {
                message: "Set parameters and trigger a refresh to fetch predictions.".to_string(),
                last_error: session.last_error.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prediction_service::PredictionService;
    use crate::application::weather_repository::WeatherRepository;
    use crate::domain::weather::{DailyWeather, GeoPoint};
    use crate::infrastructure::config::{CoordinateSettings, RegionsConfig};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct StubRepository {
        result: Result<DailyWeather, String>,
    }

    #[async_trait]
    impl WeatherRepository for StubRepository {
        async fn fetch_daily(
            &self,
            _point: GeoPoint,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> anyhow::Result<DailyWeather> {
            match &self.result {
                Ok(data) => Ok(data.clone()),
                Err(message) => Err(anyhow::anyhow!("{}", message)),
            }
        }
    }

    fn service(result: Result<DailyWeather, String>) -> DashboardService {
        let regions = RegionsConfig {
            default: CoordinateSettings {
                latitude: 20.0,
                longitude: 78.0,
            },
            regions: HashMap::new(),
        };
        DashboardService::new(PredictionService::new(
            Arc::new(StubRepository { result }),
            regions,
        ))
    }

    fn session() -> Session {
        let mut session = Session::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        session.params.start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        session.params.end_date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        session
    }

    fn three_days() -> DailyWeather {
        DailyWeather {
            temperature: vec![30.0, 32.0, 28.0],
            precipitation: vec![10.0, 5.0, 0.0],
            humidity: vec![40.0, 50.0, 60.0],
        }
    }

    #[tokio::test]
    async fn test_render_without_predictions_prompts() {
        let service = service(Ok(three_days()));
        let mut session = session();

        let view = service.render(&mut session).await;

        assert!(matches!(view, DashboardView::Prompt { .. }));
    }

    #[tokio::test]
    async fn test_refresh_then_render_builds_dashboard() {
        let service = service(Ok(three_days()));
        let mut session = session();
        session.request_refresh();

        let view = service.render(&mut session).await;

        match view {
            DashboardView::Dashboard {
                map,
                chart,
                last_error,
                ..
            } => {
                assert_eq!(map.points.len(), 3);
                assert_eq!(chart.series.len(), 3);
                assert!(last_error.is_none());
            }
            DashboardView::Prompt { .. } => panic!("expected dashboard view"),
        }
        assert!(!session.fetch_requested);
        assert_eq!(session.predictions.as_ref().unwrap().rows.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_table_and_reports_error() {
        let ok = service(Ok(three_days()));
        let mut session = session();
        session.request_refresh();
        ok.render(&mut session).await;
        let previous = session.predictions.clone();

        let failing = service(Err("HTTP 500 from upstream".to_string()));
        session.request_refresh();
        let view = failing.render(&mut session).await;

        assert_eq!(session.predictions, previous);
        match view {
            DashboardView::Dashboard { last_error, .. } => {
                assert!(last_error.unwrap().contains("HTTP 500"));
            }
            DashboardView::Prompt { .. } => panic!("previous table should still render"),
        }
    }

    #[tokio::test]
    async fn test_failed_first_fetch_prompts_with_error() {
        let failing = service(Err("connection refused".to_string()));
        let mut session = session();
        session.request_refresh();

        let view = failing.render(&mut session).await;

        match view {
            DashboardView::Prompt { last_error, .. } => {
                assert!(last_error.unwrap().contains("connection refused"));
            }
            DashboardView::Dashboard { .. } => panic!("no table should exist"),
        }
    }
}

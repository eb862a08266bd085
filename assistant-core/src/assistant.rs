use chrono::NaiveDate;
use tracing::info;

use crate::{
    compare::{TravelPlan, plan_trip},
    error::Result,
    model::CityQuery,
    provider::WeatherProvider,
    report::{CityReport, report_city},
    suggestion::SuggestionProvider,
};

/// Single-city result with the model's activity ideas.
#[derive(Debug, Clone)]
pub struct CityOutcome {
    pub report: CityReport,
    pub activities: Option<String>,
}

/// Travel result with the model's recommendation and packing list.
#[derive(Debug, Clone)]
pub struct TravelOutcome {
    pub plan: TravelPlan,
    pub recommendation: Option<String>,
    pub packing_list: Option<String>,
}

/// Wires a weather provider to an optional suggestion provider.
///
/// Without a suggestion provider the reports are produced and the
/// language-model sections are left empty.
#[derive(Debug)]
pub struct Assistant {
    weather: Box<dyn WeatherProvider>,
    suggestions: Option<Box<dyn SuggestionProvider>>,
}

impl Assistant {
    pub fn new(
        weather: Box<dyn WeatherProvider>,
        suggestions: Option<Box<dyn SuggestionProvider>>,
    ) -> Self {
        Self { weather, suggestions }
    }

    pub async fn city(&self, query: &CityQuery) -> Result<CityOutcome> {
        let report = report_city(self.weather.as_ref(), query).await?;
        let activities = self.suggest(&report.activity_prompt()).await?;
        Ok(CityOutcome { report, activities })
    }

    pub async fn travel(
        &self,
        origin: &str,
        destination: &str,
        date: Option<NaiveDate>,
    ) -> Result<TravelOutcome> {
        let plan = plan_trip(self.weather.as_ref(), origin, destination, date).await?;
        let recommendation = self.suggest(&plan.travel_prompt()).await?;
        let packing_list = self.suggest(&plan.packing_prompt()).await?;
        Ok(TravelOutcome { plan, recommendation, packing_list })
    }

    async fn suggest(&self, prompt: &str) -> Result<Option<String>> {
        match &self.suggestions {
            Some(provider) => {
                info!("asking for suggestions");
                provider.suggest(prompt).await.map(Some)
            }
            None => Ok(None),
        }
    }
}

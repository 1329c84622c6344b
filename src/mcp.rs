use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use serde::Deserialize;

use crate::config::{AdvisorConfig, Locale, WindowMode};
use crate::input::RecommendInput;
use crate::model::{FlightOffer, HotelOffer, PricePoint};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct RecommendArgs {
    #[schemars(
        description = "Flight offers: price (number), optional currency, layovers, depart_time, arrive_time, segments"
    )]
    #[serde(default)]
    flights: Vec<FlightOffer>,
    #[schemars(
        description = "Hotel offers: total_price, optional nightly_price, star_rating and review_score (0-5), date (YYYY-MM-DD)"
    )]
    #[serde(default)]
    hotels: Vec<HotelOffer>,
    #[schemars(
        description = "Observed flight prices by date. Example: [{\"date\": \"2026-04-01\", \"price\": 980}]"
    )]
    #[serde(default)]
    price_series: Vec<PricePoint>,
    #[schemars(description = "Trip length in days. Omit to infer it from hotel stays (default 5)")]
    trip_length_days: Option<f64>,
    #[schemars(description = "Explanation language: en or zh. Default: en")]
    lang: Option<String>,
    #[schemars(
        description = "positional (default) slides over observed dates; calendar only accepts consecutive days"
    )]
    window_mode: Option<WindowMode>,
}

fn tool_error(msg: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg.into())]))
}

fn build_config(args: &RecommendArgs) -> Result<AdvisorConfig, crate::error::AdviseError> {
    let mut config = AdvisorConfig::default();
    if let Some(lang) = args.lang.as_deref() {
        config.locale = Locale::from_str_loose(lang)?;
    }
    if let Some(mode) = args.window_mode {
        config.window_mode = mode;
    }
    Ok(config)
}

#[derive(Debug, Clone)]
struct FarecastMcp {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FarecastMcp {
    fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Build a travel recommendation from flight offers, hotel offers and a dated flight price series. Returns the cheapest plan, a comfort plan (comfort hotel, at most one layover), booking percentile band, price trend, the cheapest travel window of trip_length_days, and explanations. Missing data yields null fields, not errors."
    )]
    async fn farecast_recommend(
        &self,
        Parameters(args): Parameters<RecommendArgs>,
    ) -> Result<CallToolResult, McpError> {
        let config = match build_config(&args) {
            Ok(c) => c,
            Err(e) => return tool_error(e.to_string()),
        };

        let input = RecommendInput {
            flights: args.flights,
            hotels: args.hotels,
            price_series: args.price_series,
            trip_length_days: args.trip_length_days,
        };

        match crate::recommend(&input, &config) {
            Ok(rec) => match serde_json::to_string_pretty(&rec) {
                Ok(json) => Ok(CallToolResult::success(vec![Content::text(json)])),
                Err(e) => tool_error(format!("failed to serialize recommendation: {e}")),
            },
            Err(e) => {
                tracing::warn!(kind = e.kind(), "rejected recommend request: {e}");
                tool_error(e.to_string())
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for FarecastMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "farecast".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Travel price advisor. Call farecast_recommend with already-collected flight offers, hotel offers and a dated price series. It does not search or fetch prices itself.".into(),
            ),
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = FarecastMcp::new().serve(rmcp::transport::stdio()).await?;
    tracing::info!("MCP server ready on stdio");
    service.waiting().await?;
    Ok(())
}

use anyhow::anyhow;
use barkhood_ai::{Coordinates, PlaceQuery, PlaceSearchResult};

use crate::cli::PlacesArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_places;

pub(crate) async fn handle_places(ctx: &AppContext, args: &PlacesArgs) -> CliResult<()> {
    let result = search(ctx, args).await?;
    render_places(&result, ctx.output)
}

pub(crate) async fn search(ctx: &AppContext, args: &PlacesArgs) -> CliResult<PlaceSearchResult> {
    let text = args.query.trim();
    if text.is_empty() {
        return Err(CliError::validation("query must not be empty"));
    }
    let query = PlaceQuery {
        text: text.to_string(),
        coordinates: coordinates(args.lat, args.lng)?,
        language: ctx.language,
    };
    ctx.service
        .search_places(&query)
        .await
        .map_err(|err| CliError::failure(anyhow!("place search failed: {err}")))
}

/// Pair `--lat` and `--lng`; giving only one of them is an error.
pub(crate) fn coordinates(lat: Option<f64>, lng: Option<f64>) -> CliResult<Option<Coordinates>> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(latitude), Some(longitude)) => {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(CliError::validation(format!(
                    "latitude {latitude} is outside -90..=90"
                )));
            }
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(CliError::validation(format!(
                    "longitude {longitude} is outside -180..=180"
                )));
            }
            Ok(Some(Coordinates {
                latitude,
                longitude,
            }))
        }
        _ => Err(CliError::validation("--lat and --lng must be given together")),
    }
}

use thiserror::Error;

use crate::model::{Lang, QueryKind};

/// Everything that can stop a weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered with a non-success status.
    #[error("provider returned status {status} for {query_kind} query")]
    UpstreamUnavailable { status: u16, query_kind: QueryKind },

    /// Valid JSON that lacks structure the adapter needs.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The caller could not determine a position to query.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode provider JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    /// Text shown to the end user.
    pub fn user_message(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::UpstreamUnavailable { query_kind: QueryKind::Place, .. }, Lang::Pt) => {
                "Cidade não encontrada"
            }
            (Self::UpstreamUnavailable { query_kind: QueryKind::Place, .. }, Lang::En) => {
                "City not found"
            }
            (Self::UpstreamUnavailable { query_kind: QueryKind::Coords, .. }, Lang::Pt) => {
                "Erro ao buscar dados"
            }
            (Self::UpstreamUnavailable { query_kind: QueryKind::Coords, .. }, Lang::En) => {
                "Error fetching data"
            }
            (Self::LocationUnavailable(_), Lang::Pt) => {
                "Não foi possível obter sua localização. Por favor, permita o acesso ou busque manualmente."
            }
            (Self::LocationUnavailable(_), Lang::En) => {
                "Could not get your location. Please allow access or search manually."
            }
            (_, Lang::Pt) => "Erro ao buscar dados do clima",
            (_, Lang::En) => "Error fetching weather data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_not_found_differs_from_fetch_failed() {
        let place = WeatherError::UpstreamUnavailable { status: 400, query_kind: QueryKind::Place };
        let coords =
            WeatherError::UpstreamUnavailable { status: 400, query_kind: QueryKind::Coords };

        assert_eq!(place.user_message(Lang::Pt), "Cidade não encontrada");
        assert_eq!(coords.user_message(Lang::Pt), "Erro ao buscar dados");
        assert_eq!(place.user_message(Lang::En), "City not found");
    }

    #[test]
    fn malformed_response_uses_generic_message() {
        let err = WeatherError::MalformedResponse("no forecast days".into());
        assert_eq!(err.user_message(Lang::Pt), "Erro ao buscar dados do clima");
        assert!(err.to_string().contains("no forecast days"));
    }

    #[test]
    fn location_unavailable_has_own_message() {
        let err = WeatherError::LocationUnavailable("permission denied".into());
        assert!(err.user_message(Lang::En).starts_with("Could not get your location"));
    }
}

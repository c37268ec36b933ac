//! Sample figures for the home view.

use super::dto::HomeData;

const MOCK_HOME_JSON: &str = include_str!("mock_home.json");

pub fn home_data() -> anyhow::Result<HomeData> {
    let data: HomeData = serde_json::from_str(MOCK_HOME_JSON)
        .map_err(|e| anyhow::anyhow!("Failed to parse mock_home.json: {}", e))?;
    Ok(data)
}

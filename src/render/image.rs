//! Flat payload for card-image generators.

use serde::Serialize;

use crate::domain::AlmanacRecord;

/// Everything a daily-card template needs, flattened and pre-truncated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub title: String,
    pub date: String,
    pub lunar_date: String,
    pub day_pillar: String,
    pub element: String,
    /// Day na-yin; cards print this as the Chinese element reading.
    pub element_cn: String,
    pub yi: Vec<String>,
    pub ji: Vec<String>,
    pub wealth_direction: String,
    pub clash: String,
    pub zodiac: String,
}

/// Flatten an almanac record into the card payload. Activity lists are
/// capped at six entries so the template never overflows.
pub fn image_payload(r: &AlmanacRecord) -> ImagePayload {
    ImagePayload {
        title: "Chinese Almanac | 通胜黄历".to_string(),
        date: r.solar.date.clone(),
        lunar_date: format!("{}月{}", r.lunar.month_cn, r.lunar.day_cn),
        day_pillar: r.lunar.gan_zhi_day.clone(),
        element: r.elements.day_element.clone(),
        element_cn: r.elements.day_na_yin.clone(),
        yi: r.activities.yi.iter().take(6).cloned().collect(),
        ji: r.activities.ji.iter().take(6).cloned().collect(),
        wealth_direction: r.gods.cai_shen.desc.clone(),
        clash: r.clash.chong_desc.clone(),
        zodiac: r.lunar.zodiac.clone(),
    }
}

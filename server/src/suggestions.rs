use serde::{Deserialize, Serialize};

/// A single piece of health advice returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub body: String,
}

/// Full response payload for the suggestions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub message: String,
    pub suggestions: Vec<Suggestion>,
}

/// Source cited in the message for the overweight/obesity group.
const SOURCE_CITATION: &str = "Gobierno de México en Estrategia Nacional para la Prevención y el Control del Sobrepeso, la Obesidad y la Diabetes";

/// Advice for "Bajo peso".
const UNDERWEIGHT: &[(&str, &str)] = &[
    (
        "Calorie-Dense Nutrition",
        "Prioritize foods rich in nutrients and healthy calories: nuts, avocado, quality oils, legumes and whole dairy to promote healthy weight gain.",
    ),
    (
        "Frequent Meals",
        "Eat 5 to 6 small meals a day, including protein-rich snacks such as yogurt or eggs, to reach the calories you need without feeling overly full.",
    ),
    (
        "Strength Training",
        "Focus your exercise on weight or strength training (at least 3 times per week) to build muscle mass and avoid gaining excess body fat.",
    ),
];

/// Advice for "Peso normal" (maintenance).
const NORMAL_WEIGHT: &[(&str, &str)] = &[
    (
        "Nutritional Balance and Portions",
        "Keep your diet balanced. Make sure every meal includes protein, healthy fats and complex carbohydrates in adequate portions.",
    ),
    (
        "Varied Exercise",
        "Combine cardiovascular exercise (running, swimming) with strength training 3-5 times per week to maintain cardiovascular health and muscle tone.",
    ),
    (
        "Hydration and Rest",
        "Get at least 7-8 hours of quality sleep and drink enough plain water (2-3 liters) throughout the day to keep your metabolism at its best.",
    ),
];

/// Advice shared by "Sobrepeso", "Obesidad" and "Obesidad extrema".
const OVERWEIGHT_OBESITY: &[(&str, &str)] = &[
    (
        "Balanced Diet",
        "Include plenty of fruit, vegetables, lean meats or vegetarian alternatives, and whole grains such as oats, whole-grain bread and pasta. Favor fresh, seasonal foods.",
    ),
    (
        "Limit Processed Foods",
        "Avoid or limit foods and drinks high in sugar, saturated fat and salt, such as soft drinks, industrial juices, sweet breads and fried foods.",
    ),
    (
        "Moderate Aerobic Activity",
        "Do at least 30 minutes of moderate-intensity aerobic activity most days of the week (5 times), such as brisk walking, swimming or cycling.",
    ),
    (
        "Gradual Intensity Increase",
        "As your endurance and fitness improve, progressively increase the duration (up to 60 minutes) and intensity of your activity to optimize calorie burn.",
    ),
];

/// Single fallback item served for unrecognized labels.
const UNKNOWN_CLASSIFICATION: &[(&str, &str)] = &[(
    "Unknown Classification",
    "Please verify the submitted data or compute a valid BMI.",
)];

/// Returns true if the label is one of the five classifications the
/// resolver has a dedicated suggestion set for. Matching is case-sensitive.
pub fn is_recognized(classification: &str) -> bool {
    matches!(
        classification,
        "Bajo peso" | "Peso normal" | "Sobrepeso" | "Obesidad" | "Obesidad extrema"
    )
}

/// Maps a BMI classification label to its message and suggestion set.
///
/// An unrecognized label is not an error: it resolves to the fallback set
/// with a "not recognized" message echoing the label back.
pub fn resolve(classification: &str) -> SuggestionResponse {
    match classification {
        "Bajo peso" => SuggestionResponse {
            message: format!(
                "Suggestions generated for {}, based on health recommendations.",
                classification
            ),
            suggestions: to_suggestions(UNDERWEIGHT),
        },
        "Peso normal" => SuggestionResponse {
            message: format!(
                "Congratulations! Recommendations to maintain {} and a healthy lifestyle.",
                classification
            ),
            suggestions: to_suggestions(NORMAL_WEIGHT),
        },
        "Sobrepeso" | "Obesidad" | "Obesidad extrema" => SuggestionResponse {
            message: format!(
                "Suggestions for the {} group, according to the {}.",
                classification, SOURCE_CITATION
            ),
            suggestions: to_suggestions(OVERWEIGHT_OBESITY),
        },
        _ => SuggestionResponse {
            message: format!(
                "Classification '{}' not recognized. Suggestions could not be obtained.",
                classification
            ),
            suggestions: to_suggestions(UNKNOWN_CLASSIFICATION),
        },
    }
}

fn to_suggestions(table: &[(&str, &str)]) -> Vec<Suggestion> {
    table
        .iter()
        .map(|(title, body)| Suggestion {
            title: (*title).to_string(),
            body: (*body).to_string(),
        })
        .collect()
}

//! End-to-end tests for the `Curio` facade against in-memory services.
//!
//! No network: vision, text model and places are all fakes, so these run
//! anywhere and check the envelope the browser would receive.

use curio_lib::error::Result;
use curio_lib::llm::TextModel;
use curio_lib::places::{PlacesLookup, PlacesMatch};
use curio_lib::vision::{EntityObservation, LabelObservation, VisionObservations, VisionService};
use curio_lib::{Config, Curio, Domain, Error};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

struct FakeVision {
    answer: Option<VisionObservations>,
    calls: AtomicUsize,
}

impl FakeVision {
    fn returning(labels: &[(&str, f64)], entities: &[(&str, f64)]) -> Self {
        Self {
            answer: Some(VisionObservations {
                labels: labels.iter().map(|(d, c)| LabelObservation::new(*d, *c)).collect(),
                entities: entities.iter().map(|(d, c)| EntityObservation::new(*d, *c)).collect(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl VisionService for FakeVision {
    async fn annotate(&self, _image: &[u8]) -> Result<VisionObservations> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().ok_or(Error::Upstream {
            service: "Vision",
            message: "HTTP 403: API key not valid".into(),
        })
    }
}

/// Replies in order; runs dry with an upstream error.
struct ScriptedModel {
    replies: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().rev().map(|r| r.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextModel for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies.lock().unwrap().pop().ok_or(Error::Upstream {
            service: "Gemini",
            message: "HTTP 429: quota exceeded".into(),
        })
    }
}

struct FixedPlaces(Option<PlacesMatch>);

impl PlacesLookup for FixedPlaces {
    async fn lookup(&self, _query: &str) -> Result<Option<PlacesMatch>> {
        Ok(self.0.clone())
    }
}

fn curio(
    vision: FakeVision,
    replies: &[&str],
    places: Option<PlacesMatch>,
) -> Curio<ScriptedModel, FakeVision, FixedPlaces> {
    Curio::with_clients(
        Config::default(),
        ScriptedModel::new(replies),
        vision,
        FixedPlaces(places),
    )
}

fn png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    image::RgbImage::new(4, 4)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[tokio::test]
async fn known_artwork_is_identified() {
    let vision = FakeVision::returning(
        &[("Painting", 0.97), ("Art", 0.93)],
        &[("Mona Lisa", 0.9), ("Leonardo da Vinci", 0.8), ("Portrait", 0.7)],
    );
    let app = curio(vision, &[], None);
    let env = app.analyze_upload(Domain::Artwork, &png_bytes()).await;

    eprintln!("[TEST] {}", serde_json::to_string(&env).unwrap());
    assert!(env.success);
    assert_eq!(env.subject_name, "Mona Lisa");
    assert_eq!(env.result_payload["creator_name"], "Leonardo da Vinci");
    assert_eq!(env.result_payload["resolved"], true);
    assert_eq!(env.result_payload["domain"], "artwork");
}

#[tokio::test]
async fn unidentifiable_image_is_still_a_success() {
    let vision = FakeVision::returning(&[("Rectangle", 0.6)], &[("Thing", 0.1)]);
    let app = curio(vision, &[], None);
    let env = app.analyze_upload(Domain::Architecture, &png_bytes()).await;

    assert!(env.success);
    assert_eq!(env.subject_name, "Unable to identify building");
    assert_eq!(env.result_payload["creator_name"], "Unknown Architect");
    assert_eq!(env.result_payload["resolved"], false);
    assert!(env.error.is_none());
}

#[tokio::test]
async fn food_upload_picks_specific_label() {
    let vision = FakeVision::returning(
        &[("Food", 0.99), ("Noodle", 0.95), ("Ramen", 0.9)],
        &[("Tonkotsu", 0.9)],
    );
    let app = curio(vision, &[], None);
    let env = app.analyze_upload(Domain::Food, &png_bytes()).await;

    assert!(env.success);
    assert_eq!(env.subject_name, "Ramen");
    assert_eq!(env.result_payload["creator_name"], "Unknown");
}

#[tokio::test]
async fn vision_failure_is_a_failure_envelope() {
    let app = curio(FakeVision::failing(), &[], None);
    let env = app.analyze_upload(Domain::Artwork, &png_bytes()).await;

    assert!(!env.success);
    assert_eq!(env.subject_name, "Analysis Failed");
    assert!(env.error.unwrap().contains("Vision call failed"));
}

#[tokio::test]
async fn non_image_upload_never_reaches_vision() {
    let vision = FakeVision::returning(&[], &[]);
    let app = curio(vision, &[], None);
    let env = app.analyze_upload(Domain::Food, b"<html>not an image</html>").await;

    assert!(!env.success);
    assert!(env.error.unwrap().starts_with("Unsupported upload"));
}

#[tokio::test]
async fn themes_and_details_return_raw_text() {
    let app = curio(
        FakeVision::failing(),
        &["Catalan Modernisme, organic forms", "A basilica in Barcelona."],
        None,
    );
    let themes = app.themes(Domain::Architecture, " Sagrada Familia ").await;
    let details = app.details(Domain::Architecture, "Sagrada Familia").await;

    assert!(themes.success);
    assert_eq!(themes.subject_name, "Sagrada Familia");
    assert_eq!(themes.result_payload["themes"], "Catalan Modernisme, organic forms");
    assert_eq!(details.result_payload["details"], "A basilica in Barcelona.");
}

#[tokio::test]
async fn food_suggestions_are_enriched() {
    let reply = "```python\n[[\"Ippudo\", \"Japanese\", \"$$\", \"Unknown\", \"65 4th Ave\"],\n [\"Totto Ramen\", \"Japanese\", \"$\", 4.5, \"464 W 51st St\"]]\n```";
    let app = curio(
        FakeVision::failing(),
        &["rich pork broth, umami", reply],
        Some(PlacesMatch::new("ChIJ_ippudo", "65 4th Ave, New York", Some(4.3))),
    );
    let env = app.suggestions(Domain::Food, "Ramen", Some("Chicago")).await;

    assert!(env.success, "{:?}", env.error);
    let payload = &env.result_payload;
    assert_eq!(payload["themes"], "rich pork broth, umami");
    assert_eq!(payload["location"], "Chicago");

    let rows = payload["suggestions"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Restaurant Name"], "Ippudo");
    assert_eq!(rows[0]["Yelp Stars"], "4.3");
    assert_eq!(
        rows[0]["Map Link"],
        "https://www.google.com/maps/place/?q=place_id:ChIJ_ippudo"
    );
    assert_eq!(rows[1]["Yelp Stars"], "4.5");

    let prompts = app_prompts(&app);
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("restaurants in Chicago that serve Ramen"));
    assert!(prompts[1].ends_with("\nrich pork broth, umami"));
}

#[tokio::test]
async fn missing_location_uses_configured_default() {
    let app = curio(FakeVision::failing(), &["broth", "[]"], None);
    let env = app.suggestions(Domain::Food, "Pho", None).await;

    assert!(env.success);
    assert_eq!(env.result_payload["location"], "New York");
    assert_eq!(env.result_payload["suggestions"], serde_json::json!([]));
}

#[tokio::test]
async fn artwork_suggestions_have_no_location_or_links() {
    let reply = r#"[["The Night Café", "Vincent van Gogh", 1888, "Yale University Art Gallery", "https://en.wikipedia.org/wiki/The_Night_Caf%C3%A9"]]"#;
    let app = curio(
        FakeVision::failing(),
        &["post-impressionism", reply],
        Some(PlacesMatch::new("unused", "", None)),
    );
    let env = app.suggestions(Domain::Artwork, "The Starry Night", Some("Paris")).await;

    assert!(env.success);
    assert!(env.result_payload.get("location").is_none());
    let row = &env.result_payload["suggestions"][0];
    assert_eq!(row["Year"], "1888");
    assert!(row.get("Map Link").is_none());
}

#[tokio::test]
async fn unparseable_suggestions_give_empty_list_and_error() {
    let app = curio(
        FakeVision::failing(),
        &["umami", "Sorry, I can't recommend restaurants right now."],
        None,
    );
    let env = app.suggestions(Domain::Food, "Ramen", None).await;

    assert!(!env.success);
    assert_eq!(env.subject_name, "Ramen");
    assert_eq!(env.result_payload["suggestions"], serde_json::json!([]));
    assert_eq!(env.result_payload["location"], "New York");
    assert!(env.error.unwrap().starts_with("Could not parse suggestions"));
}

#[tokio::test]
async fn model_failure_is_a_failure_envelope() {
    let app = curio(FakeVision::failing(), &[], None);
    let env = app.suggestions(Domain::Architecture, "Fallingwater", None).await;

    assert!(!env.success);
    assert!(env.result_payload.get("location").is_none());
    assert!(env.error.unwrap().contains("Gemini call failed"));
}

#[tokio::test]
async fn blank_subject_is_rejected_before_any_call() {
    let app = curio(FakeVision::failing(), &["never used"], None);
    let env = app.themes(Domain::Food, "   ").await;

    assert!(!env.success);
    assert_eq!(env.error.as_deref(), Some("Subject name is empty"));
    assert!(app_prompts(&app).is_empty());
}

fn app_prompts(app: &Curio<ScriptedModel, FakeVision, FixedPlaces>) -> Vec<String> {
    app.model().prompts()
}

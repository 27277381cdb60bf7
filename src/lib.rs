pub mod client;
pub mod deck;
pub mod error;
pub mod render;

pub use client::{Completion, OpenAiClient};
pub use deck::{Slide, SlideDeck};
pub use error::{Error, Result};

/// Builds the instruction sent to the model. The topic and count are not
/// validated; a non-positive count goes into the prompt as-is.
fn deck_prompt(topic: &str, slide_count: i32) -> String {
    format!(
        "Create a {slide_count}-slide presentation about '{topic}'. \
         Provide output as JSON with 'slides' as a list of objects \
         containing 'title' and 'bullet_points'."
    )
}

/// Prompts the model, parses its JSON response and renders the deck into a
/// standalone HTML page titled after the topic.
///
/// The model decides how many slides actually come back; whatever is
/// returned is rendered in order.
pub async fn generate_presentation<C: Completion>(
    client: &C,
    topic: &str,
    slide_count: i32,
) -> Result<String> {
    let prompt = deck_prompt(topic, slide_count);
    log::info!("Prompt: {:?}", prompt);

    let raw = client.complete(&prompt).await?;
    log::info!("Response ({} characters): {:?}", raw.len(), raw);

    let deck = SlideDeck::from_json(&raw)?;
    Ok(render::render_document(topic, &deck))
}

//! Instruction text sent with every image.
//!
//! The wording and the example schema are what the model is asked to echo
//! back; changing them changes what the extractor has to cope with.

pub const CAPTION_PROMPT: &str = "You are a social media expert. Analyze this image and generate social media captions.

Return ONLY valid JSON, no other text:
{
  \"instagram\": {
    \"platform\": \"Instagram\",
    \"caption\": \"An engaging caption with emojis and hashtags for Instagram\",
    \"hashtags\": [\"tag1\", \"tag2\", \"tag3\", \"tag4\", \"tag5\"]
  },
  \"linkedin\": {
    \"platform\": \"LinkedIn\",
    \"caption\": \"A professional caption focused on insights and career growth\",
    \"hashtags\": [\"tag1\", \"tag2\", \"tag3\", \"tag4\", \"tag5\"]
  }
}";

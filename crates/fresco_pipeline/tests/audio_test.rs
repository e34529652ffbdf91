//! Music and voiceover generation tests.

mod support;

use fresco_pipeline::{generate_music, generate_voiceovers};
use support::{MockSpeechSynthesizer, TestHarness, sample_scenario, sample_scene};

#[tokio::test]
async fn test_music_brief_is_genre_mood_and_description() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let services = harness.services();
    let scenario = sample_scenario();

    let uri = generate_music(&services, &scenario).await?;

    assert_eq!(
        harness.music.prompt(0),
        "Cinematic, Calm, Gentle strings over slow waves"
    );
    assert!(uri.starts_with("gs://test-bucket/audio/music-"));
    assert!(uri.ends_with(".wav"));
    assert!(harness.store.upload_key(0).starts_with("audio/music-"));
    Ok(())
}

#[tokio::test]
async fn test_voiceovers_preserve_order_and_isolate_failures() -> anyhow::Result<()> {
    let scenes = vec![
        sample_scene("Dawn at the tower", &["Ada"]),
        sample_scene("The storm breaks", &["Ada"]),
        sample_scene("Calm returns", &["Ada"]),
    ];

    let mut harness = TestHarness::new();
    harness.speech = MockSpeechSynthesizer::failing_on("The storm breaks");
    let services = harness.services();

    let results = generate_voiceovers(&services, &scenes, "en-US", None).await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert!(results[1].is_failure());
    assert!(results[2].is_success());
    for result in [&results[0], &results[2]] {
        let uri = result.value().unwrap();
        assert!(uri.starts_with("gs://test-bucket/audio/voiceover-"));
        assert!(uri.ends_with(".mp3"));
    }
    assert_eq!(harness.speech.call_count(), 3);
    Ok(())
}

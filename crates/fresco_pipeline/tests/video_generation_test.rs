//! Scene video generation tests: fan-out ordering, poll behavior, timeout,
//! and moderation handling.

mod support;

use fresco_pipeline::{VideoRunSettings, generate_videos};
use std::time::Duration;
use support::{MockVideoGenerator, TestHarness, VideoOutcome, sample_scene};

fn fast_settings() -> VideoRunSettings {
    VideoRunSettings {
        poll_interval: Duration::from_millis(5),
        poll_timeout: Duration::from_millis(200),
        ..VideoRunSettings::default()
    }
}

#[tokio::test]
async fn test_generates_one_video_per_image_bearing_scene() -> anyhow::Result<()> {
    let mut scene_a = sample_scene("Dawn at the tower", &["Ada"]);
    scene_a.image_gcs_uri = Some("gs://test-bucket/images/scene-a.png".to_string());
    let scene_b = sample_scene("No image yet", &[]);
    let mut scene_c = sample_scene("The monster surfaces", &["The Monster"]);
    scene_c.image_gcs_uri = Some("gs://test-bucket/images/scene-c.png".to_string());

    let harness = TestHarness::new();
    let services = harness.services();

    let results = generate_videos(
        &services,
        &[scene_a, scene_b, scene_c],
        &fast_settings(),
    )
    .await;

    // Scene B has no image and is filtered out before the fan-out.
    assert_eq!(results.len(), 2);
    assert_eq!(harness.video.submit_count(), 2);
    for result in &results {
        assert!(result.value().unwrap().starts_with("gs://test-bucket/videos/"));
    }
    Ok(())
}

#[tokio::test]
async fn test_results_preserve_input_order_across_poll_latencies() -> anyhow::Result<()> {
    let mut scene_a = sample_scene("Slow scene", &["Ada"]);
    scene_a.image_gcs_uri = Some("gs://test-bucket/images/slow.png".to_string());
    let mut scene_b = sample_scene("Fast scene", &["Ada"]);
    scene_b.image_gcs_uri = Some("gs://test-bucket/images/fast.png".to_string());

    let mut harness = TestHarness::new();
    // The first scene needs four polls, the second completes immediately,
    // so completion order is reversed relative to input order.
    harness.video = MockVideoGenerator::with_rules(vec![
        ("slow.png", VideoOutcome::DoneAfter(4)),
        ("fast.png", VideoOutcome::DoneAfter(1)),
    ]);
    let services = harness.services();

    let results = generate_videos(&services, &[scene_a, scene_b], &fast_settings()).await;

    assert_eq!(results.len(), 2);
    assert!(results[0].value().unwrap().contains("slow"));
    assert!(results[1].value().unwrap().contains("fast"));
    Ok(())
}

#[tokio::test]
async fn test_filtered_video_fails_alone_with_translated_message() -> anyhow::Result<()> {
    let mut scene_a = sample_scene("Fine scene", &["Ada"]);
    scene_a.image_gcs_uri = Some("gs://test-bucket/images/fine.png".to_string());
    let mut scene_b = sample_scene("Blocked scene", &["Ada"]);
    scene_b.image_gcs_uri = Some("gs://test-bucket/images/blocked.png".to_string());

    let mut harness = TestHarness::new();
    harness.video = MockVideoGenerator::with_rules(vec![(
        "blocked.png",
        VideoOutcome::Filtered("Support codes: 56562880".to_string()),
    )]);
    let services = harness.services();

    let results = generate_videos(&services, &[scene_a, scene_b], &fast_settings()).await;

    assert!(results[0].is_success());
    let message = results[1].error_message().unwrap();
    assert!(message.contains("violence"), "unexpected message: {message}");
    Ok(())
}

#[tokio::test]
async fn test_poll_timeout_is_distinct_and_isolated() -> anyhow::Result<()> {
    let mut scene_a = sample_scene("Stuck scene", &["Ada"]);
    scene_a.image_gcs_uri = Some("gs://test-bucket/images/stuck.png".to_string());
    let mut scene_b = sample_scene("Healthy scene", &["Ada"]);
    scene_b.image_gcs_uri = Some("gs://test-bucket/images/healthy.png".to_string());

    let mut harness = TestHarness::new();
    harness.video = MockVideoGenerator::with_rules(vec![("stuck.png", VideoOutcome::NeverDone)]);
    let services = harness.services();

    let settings = VideoRunSettings {
        poll_interval: Duration::from_millis(5),
        poll_timeout: Duration::from_millis(30),
        ..VideoRunSettings::default()
    };
    let results = generate_videos(&services, &[scene_a, scene_b], &settings).await;

    let message = results[0].error_message().unwrap();
    assert!(message.contains("timed out"), "unexpected message: {message}");
    assert!(results[1].is_success());
    Ok(())
}

#[tokio::test]
async fn test_operation_error_translates_for_display() -> anyhow::Result<()> {
    let mut scene = sample_scene("Rejected scene", &["Ada"]);
    scene.image_gcs_uri = Some("gs://test-bucket/images/rejected.png".to_string());

    let mut harness = TestHarness::new();
    harness.video = MockVideoGenerator::with_rules(vec![(
        "rejected.png",
        VideoOutcome::OperationError("blocked, Support codes: 61493863".to_string()),
    )]);
    let services = harness.services();

    let results = generate_videos(&services, &[scene], &fast_settings()).await;
    let message = results[0].error_message().unwrap();
    assert!(message.contains("violence"), "unexpected message: {message}");
    Ok(())
}

#[tokio::test]
async fn test_submission_carries_prompt_and_parameters() -> anyhow::Result<()> {
    let mut scene = sample_scene("Dawn at the tower", &["Ada"]);
    scene.image_gcs_uri = Some("gs://test-bucket/images/dawn.png".to_string());

    let harness = TestHarness::new();
    let services = harness.services();

    let settings = VideoRunSettings {
        aspect_ratio: "4:3".to_string(),
        duration_seconds: 6,
        generate_audio: false,
        ..fast_settings()
    };
    generate_videos(&services, &[scene], &settings).await;

    let submit = harness.video.submit(0);
    assert!(submit.prompt.contains("Action: The keeper waves from the gallery"));
    assert!(submit.prompt.ends_with("Subtitles: off"));
    // Only portrait 9:16 is honored as-is; other ratios render landscape.
    assert_eq!(submit.aspect_ratio, "16:9");
    assert_eq!(submit.duration_seconds, 6);
    assert!(!submit.generate_audio);
    Ok(())
}

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end conversations through the full agent pipeline.

use std::sync::Arc;

use solace_agent::Agent;
use solace_config::SolaceConfig;
use solace_core::{Emotion, Intent, Theme};
use solace_dialogue::content::CRISIS_MESSAGE;
use solace_dialogue::ContentLibrary;
use solace_memory::MemoryStore;
use solace_test_utils::TestHarness;

#[tokio::test]
async fn anxious_and_scared_gets_fear_support() {
    let harness = TestHarness::new().unwrap();
    let (reply, context) = harness
        .agent()
        .interact_with_context("I feel so anxious and scared today")
        .await;

    assert_eq!(context.emotion, Some(Emotion::Fear));
    assert_eq!(context.intent, Intent::EmotionalSupport);
    assert!(!context.is_crisis);
    // "scared" contains "care", which is a compassion keyword.
    assert_eq!(context.themes.iter().copied().collect::<Vec<_>>(), vec![Theme::Compassion]);
    assert_eq!(
        reply,
        "Fear is natural. You're not alone. Let's take this one breath at a time together."
    );
}

#[tokio::test]
async fn meditation_request_picks_from_pool() {
    let harness = TestHarness::builder().with_random(vec![2]).build().unwrap();
    let (reply, context) = harness
        .agent()
        .interact_with_context("I want to meditate, can you guide me?")
        .await;

    assert_eq!(context.intent, Intent::MeditationRequest);
    assert_eq!(context.emotion, None);
    assert_eq!(reply, ContentLibrary::builtin().meditations()[2]);
}

#[tokio::test]
async fn crisis_overrides_everything_including_the_llm() {
    let harness = TestHarness::builder()
        .with_llm_responses(vec!["A calm and lengthy model reply.".into()])
        .build()
        .unwrap();

    let reply = harness
        .send_message("I'm grateful for my friends but I want to die")
        .await;
    assert_eq!(reply, CRISIS_MESSAGE);
    assert!(reply.contains("988"));
    assert_eq!(harness.provider().unwrap().call_count().await, 0);
}

#[tokio::test]
async fn every_crisis_phrase_gets_the_crisis_message() {
    let harness = TestHarness::new().unwrap();
    for phrase in solace_classifier::keywords::CRISIS_PHRASES {
        for text in [
            phrase.to_string(),
            format!("I am so grateful, but I think about {phrase}"),
            format!("Please guide my meditation. {}", phrase.to_uppercase()),
        ] {
            assert_eq!(harness.send_message(&text).await, CRISIS_MESSAGE, "{text}");
        }
    }
}

#[tokio::test]
async fn llm_reply_is_trimmed_and_used() {
    let harness = TestHarness::builder()
        .with_llm_responses(vec!["   Let us breathe together for a moment.  \n".into()])
        .build()
        .unwrap();

    let reply = harness.send_message("hello").await;
    assert_eq!(reply, "Let us breathe together for a moment.");
}

#[tokio::test]
async fn short_llm_reply_falls_back_to_rules() {
    let harness = TestHarness::builder()
        .with_llm_responses(vec!["   ok   ".into()])
        .build()
        .unwrap();

    let reply = harness.send_message("I am so thankful").await;
    assert_eq!(reply, solace_dialogue::handler::GRATITUDE_REPLY);
    assert_eq!(harness.provider().unwrap().call_count().await, 1);
}

#[tokio::test]
async fn failing_llm_never_surfaces() {
    let harness = TestHarness::builder().with_failing_llm().build().unwrap();
    let reply = harness.send_message("what is the purpose of my soul").await;
    assert_eq!(reply, solace_dialogue::handler::SPIRITUAL_REPLY);
}

#[tokio::test]
async fn short_term_evicts_oldest_turn() {
    let harness = TestHarness::builder().with_capacities(3, 50).build().unwrap();
    for text in ["one", "two", "three", "four"] {
        harness.send_message(text).await;
    }

    let insights = harness.agent().insights().await;
    assert_eq!(insights.total_interactions, 3);
}

#[tokio::test]
async fn fresh_agent_has_neutral_insights() {
    let harness = TestHarness::new().unwrap();
    let insights = harness.agent().insights().await;
    assert_eq!(insights.total_interactions, 0);
    assert_eq!(insights.emotional_trend, "neutral");
}

#[tokio::test]
async fn durable_memory_survives_restart() {
    let mut harness = TestHarness::new().unwrap();
    harness.send_message("I feel so sad and lonely").await;
    harness.send_message("hello").await;
    harness.send_message("what is the meaning of life").await;

    let before = MemoryStore::with_defaults(harness.memory_path());
    assert_eq!(before.episodic().len(), 2);
    assert_eq!(before.long_term().count(Emotion::Sadness), 1);

    harness.restart();
    // Short-term memory does not survive a restart.
    assert_eq!(harness.agent().insights().await.total_interactions, 0);

    harness.send_message("I am scared").await;
    let after = MemoryStore::with_defaults(harness.memory_path());
    assert_eq!(after.episodic().len(), 3);
    assert_eq!(&after.episodic()[..2], before.episodic());
    assert_eq!(after.long_term().count(Emotion::Sadness), 1);
    assert_eq!(after.long_term().count(Emotion::Fear), 1);
}

#[tokio::test]
async fn concurrent_messages_are_all_recorded() {
    let harness = TestHarness::new().unwrap();
    let agent = harness.agent();

    let mut tasks = Vec::new();
    for i in 0..8 {
        let agent = Arc::clone(&agent);
        tasks.push(tokio::spawn(async move {
            agent.interact(&format!("I feel happy, message {i}")).await
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let insights = agent.insights().await;
    assert_eq!(insights.total_interactions, 8);
    assert_eq!(insights.emotional_trend, "joy");

    let reopened = MemoryStore::with_defaults(harness.memory_path());
    assert_eq!(reopened.long_term().count(Emotion::Joy), 8);
    assert_eq!(reopened.episodic().len(), 8);
}

#[tokio::test]
async fn from_config_uses_content_files_and_memory_path() {
    let dir = tempfile::tempdir().unwrap();
    let meditations = dir.path().join("meditations.md");
    std::fs::write(&meditations, "Sit quietly.\n---\n\n---\nWatch the breath.\n").unwrap();
    let quotes = dir.path().join("quotes.json");
    std::fs::write(&quotes, r#"{"quotes": ["Be here now."]}"#).unwrap();

    let mut config = SolaceConfig::default();
    config.memory.path = dir.path().join("nested/memories.json").display().to_string();
    config.content.meditation_prompts_file = Some(meditations.display().to_string());
    config.content.wisdom_quotes_file = Some(quotes.display().to_string());
    config.agent.system_prompt = Some("You are a quiet presence.".into());

    let agent = Agent::from_config(&config).await;
    assert_eq!(agent.backend_name(), "mock");

    let meditation = agent.daily_meditation();
    assert!(meditation == "Sit quietly." || meditation == "Watch the breath.");

    let reply = agent.interact("any advice for me?").await;
    assert_eq!(reply, "Be here now.\n\nWhat are your thoughts on this?");
    assert!(dir.path().join("nested/memories.json").exists());
}

#[tokio::test]
async fn from_config_with_unknown_backend_is_rule_based() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SolaceConfig::default();
    config.memory.path = dir.path().join("memories.json").display().to_string();
    config.llm.backend = "gpt-local".into();

    let agent = Agent::from_config(&config).await;
    assert_eq!(agent.backend_name(), "mock");
    assert_eq!(
        agent.interact("I am so grateful").await,
        solace_dialogue::handler::GRATITUDE_REPLY
    );
}

#[tokio::test]
async fn default_mock_backend_replies_from_rules() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SolaceConfig::default();
    config.memory.path = dir.path().join("memories.json").display().to_string();

    let agent = Agent::from_config(&config).await;
    let reply = agent.interact("I am so grateful").await;
    assert_eq!(reply, solace_dialogue::handler::GRATITUDE_REPLY);
    assert_ne!(reply, solace_agent::mock::GRATITUDE_REPLY);
}

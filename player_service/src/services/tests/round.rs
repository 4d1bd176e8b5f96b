//! Round orchestration scenarios against mocked dependencies

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockall::predicate::eq;

use shared::{Choice, ChoiceInput, Outcome, PlayRequest};

use crate::core::{FactCorpus, RoundOrchestrator};
use crate::error::{PlayerError, PlayerResult};
use crate::traits::{GameClient, MockGameClient, MockRandomSource, MockScoreClient, ScoreClient};

fn orchestrator<R, G, S>(random: R, game: G, score: S) -> RoundOrchestrator<R, G, S>
where
    R: crate::traits::RandomSource,
    G: GameClient,
    S: ScoreClient,
{
    RoundOrchestrator::new(random, game, score, Arc::new(FactCorpus::standard()))
}

fn play_request(choice: ChoiceInput, user_id: Option<&str>) -> PlayRequest {
    PlayRequest {
        player_choice: Some(choice),
        user_id: user_id.map(str::to_string),
    }
}

/// A game client that never answers within any reasonable budget
struct SlowGameClient;

#[async_trait]
impl GameClient for SlowGameClient {
    async fn compute(&self, _player: Choice, _computer: Choice) -> PlayerResult<Outcome> {
        tokio::time::sleep(Duration::from_secs(600)).await;
        Ok(Outcome::Tie)
    }
}

#[tokio::test]
async fn random_three_over_five_choices_selects_scissors() {
    // random_number 3 -> index (3 - 1) % 5 = 2 -> scissors
    let mut random = MockRandomSource::new();
    random.expect_random_number().returning(|| Ok(3));

    let mut game = MockGameClient::new();
    game.expect_compute()
        .with(eq(Choice::Rock), eq(Choice::Scissors))
        .returning(|_, _| Ok(Outcome::PlayerWins));

    let mut score = MockScoreClient::new();
    score
        .expect_record()
        .withf(|entry| {
            entry.user_id == "alice"
                && entry.player_choice == Choice::Rock
                && entry.computer_choice == Choice::Scissors
                && entry.result == Outcome::PlayerWins
        })
        .returning(|_| Ok(()));

    let orchestrator = orchestrator(random, game, score);
    let response = orchestrator
        .play(play_request(ChoiceInput::Name("rock".to_string()), Some("alice")))
        .await
        .unwrap();

    assert_eq!(response.player_choice, Choice::Rock);
    assert_eq!(response.computer_choice, Choice::Scissors);
    assert_eq!(response.result, Outcome::PlayerWins);
    assert_eq!(response.fun_fact, "Rock crushes scissors... sharp edges beware!");
}

#[tokio::test]
async fn missing_choice_fails_before_any_dependency_call() {
    // No expectations set: any dependency call would panic the mock
    let orchestrator = orchestrator(
        MockRandomSource::new(),
        MockGameClient::new(),
        MockScoreClient::new(),
    );

    let err = orchestrator.play(PlayRequest::default()).await.unwrap_err();
    assert!(matches!(err, PlayerError::ChoiceRequired));

    let err = orchestrator
        .play(play_request(ChoiceInput::Id(-1), None))
        .await
        .unwrap_err();
    assert!(matches!(err, PlayerError::ChoiceRequired));
}

#[tokio::test]
async fn unknown_choice_fails_with_the_valid_names() {
    let orchestrator = orchestrator(
        MockRandomSource::new(),
        MockGameClient::new(),
        MockScoreClient::new(),
    );

    let err = orchestrator
        .play(play_request(ChoiceInput::Name("well".to_string()), None))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("rock, paper, scissors, lizard, spock"));
}

#[tokio::test]
async fn numeric_choice_id_is_accepted() {
    // random_number 1 -> index 0 -> rock
    let mut random = MockRandomSource::new();
    random.expect_random_number().returning(|| Ok(1));

    let mut game = MockGameClient::new();
    game.expect_compute()
        .with(eq(Choice::Scissors), eq(Choice::Rock))
        .returning(|_, _| Ok(Outcome::ComputerWins));

    let mut score = MockScoreClient::new();
    score.expect_record().returning(|_| Ok(()));

    let orchestrator = orchestrator(random, game, score);
    let response = orchestrator
        .play(play_request(ChoiceInput::Id(2), None))
        .await
        .unwrap();

    assert_eq!(response.player_choice, Choice::Scissors);
    assert_eq!(response.computer_choice, Choice::Rock);
    // Computer won, so the fact is keyed (rock, scissors)
    assert_eq!(response.fun_fact, "Rock crushes scissors... sharp edges beware!");
}

#[tokio::test]
async fn remote_random_failure_degrades_to_local_pick() {
    let mut random = MockRandomSource::new();
    random.expect_random_number().returning(|| {
        Err(PlayerError::InvalidResponse {
            message: "boom".to_string(),
        })
    });

    let mut game = MockGameClient::new();
    game.expect_compute()
        .withf(|_, computer| Choice::ALL.contains(computer))
        .returning(|_, _| Ok(Outcome::Tie));

    let mut score = MockScoreClient::new();
    score.expect_record().returning(|_| Ok(()));

    let orchestrator = orchestrator(random, game, score);
    let response = orchestrator
        .play(play_request(ChoiceInput::Name("spock".to_string()), None))
        .await
        .unwrap();

    assert!(Choice::ALL.contains(&response.computer_choice));
    assert_eq!(response.result, Outcome::Tie);
}

#[tokio::test]
async fn out_of_range_random_number_degrades_to_local_pick() {
    for bad in [0, 101, -5] {
        let mut random = MockRandomSource::new();
        random.expect_random_number().returning(move || Ok(bad));

        let orchestrator = orchestrator(random, MockGameClient::new(), MockScoreClient::new());
        let choice = orchestrator.select_opponent(&Choice::ALL).await;
        assert!(Choice::ALL.contains(&choice));
    }
}

#[tokio::test]
async fn selector_never_fails_even_when_remote_always_fails() {
    let mut random = MockRandomSource::new();
    random.expect_random_number().times(20).returning(|| {
        Err(PlayerError::InvalidResponse {
            message: "always down".to_string(),
        })
    });

    let orchestrator = orchestrator(random, MockGameClient::new(), MockScoreClient::new());
    for _ in 0..20 {
        let choice = orchestrator.select_opponent(&Choice::ALL).await;
        assert!(Choice::ALL.contains(&choice));
    }
}

#[tokio::test]
async fn game_failure_aborts_the_round_without_recording() {
    let mut random = MockRandomSource::new();
    random.expect_random_number().returning(|| Ok(5));

    let mut game = MockGameClient::new();
    game.expect_compute().returning(|_, _| {
        Err(PlayerError::InvalidResponse {
            message: "game service returned an unreadable result".to_string(),
        })
    });

    // Score mock has no expectations: recording would panic
    let orchestrator = orchestrator(random, game, MockScoreClient::new());
    let err = orchestrator
        .play(play_request(ChoiceInput::Name("paper".to_string()), None))
        .await
        .unwrap_err();

    assert!(matches!(err, PlayerError::GameUnavailable { .. }));
}

#[tokio::test]
async fn game_timeout_aborts_the_round_without_recording() {
    let mut random = MockRandomSource::new();
    random.expect_random_number().returning(|| Ok(10));

    let orchestrator = orchestrator(random, SlowGameClient, MockScoreClient::new())
        .with_call_timeout(Duration::from_millis(20));

    let err = orchestrator
        .play(play_request(ChoiceInput::Name("lizard".to_string()), None))
        .await
        .unwrap_err();

    assert!(matches!(err, PlayerError::GameTimeout));
}

#[tokio::test]
async fn score_failure_still_returns_a_successful_round() {
    let mut random = MockRandomSource::new();
    random.expect_random_number().returning(|| Ok(2));

    let mut game = MockGameClient::new();
    game.expect_compute()
        .with(eq(Choice::Spock), eq(Choice::Paper))
        .returning(|_, _| Ok(Outcome::ComputerWins));

    let mut score = MockScoreClient::new();
    score.expect_record().returning(|_| {
        Err(PlayerError::InvalidResponse {
            message: "ledger down".to_string(),
        })
    });

    let orchestrator = orchestrator(random, game, score);
    let response = orchestrator
        .play(play_request(ChoiceInput::Name("spock".to_string()), Some("bob")))
        .await
        .unwrap();

    assert_eq!(response.result, Outcome::ComputerWins);
    assert_eq!(
        response.fun_fact,
        "Paper disproves Spock... logic can't beat bureaucracy!"
    );
}

#[tokio::test]
async fn blank_user_id_is_recorded_as_anonymous() {
    let mut random = MockRandomSource::new();
    random.expect_random_number().returning(|| Ok(3));

    let mut game = MockGameClient::new();
    game.expect_compute().returning(|_, _| Ok(Outcome::PlayerWins));

    let mut score = MockScoreClient::new();
    score
        .expect_record()
        .withf(|entry| entry.user_id == shared::ANONYMOUS_USER)
        .returning(|_| Ok(()));

    let orchestrator = orchestrator(random, game, score);
    orchestrator
        .play(play_request(ChoiceInput::Name("rock".to_string()), Some("  ")))
        .await
        .unwrap();
}

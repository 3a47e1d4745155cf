//! Unit tests for wizard navigation, branching, and submission.

use std::sync::{Arc, Mutex};

use crate::{
    error::{Result, RsvpError},
    gateway::{NullGateway, SubmissionGateway},
    models::{position_of, AnswerField, AnswerRecord, StepId},
    wizard::{
        nav::{Advance, Retreat},
        validate::is_step_valid,
        Wizard, WizardBuilder,
    },
};

/// Gateway that records every delivered record.
#[derive(Default)]
struct RecordingGateway {
    delivered: Mutex<Vec<AnswerRecord>>,
    fail: bool,
}

impl RecordingGateway {
    fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn deliveries(&self) -> Vec<AnswerRecord> {
        self.delivered.lock().expect("gateway mutex poisoned").clone()
    }
}

impl SubmissionGateway for RecordingGateway {
    fn deliver(&self, answers: &AnswerRecord) -> Result<()> {
        self.delivered
            .lock()
            .expect("gateway mutex poisoned")
            .push(answers.clone());
        if self.fail {
            Err(RsvpError::gateway("simulated outage"))
        } else {
            Ok(())
        }
    }
}

fn wizard_with(gateway: Arc<dyn SubmissionGateway>) -> Wizard {
    WizardBuilder::new()
        .with_gateway(gateway)
        .build()
        .expect("builder with gateway must succeed")
}

/// Record with every pre-contact choice answered and the post-wedding trip
/// accepted.
fn answered_record() -> AnswerRecord {
    let mut record = AnswerRecord::default();
    record.set(AnswerField::Travel, "Train");
    record.set(AnswerField::Accommodation, "Yes");
    record.set(AnswerField::NubianNight, "Yes");
    record.set(AnswerField::Wedding, "Yes");
    record.set(AnswerField::PostWedding, "Yes, I’m in");
    record
}

async fn advance_to(wizard: &mut Wizard, step: StepId) {
    while wizard.current_step() != step {
        match wizard.go_next().await.expect("go_next") {
            Advance::Moved => {}
            other => panic!("unexpected outcome while advancing: {other:?}"),
        }
    }
}

#[test]
fn builder_requires_a_gateway() {
    let err = WizardBuilder::new().build().unwrap_err();
    assert!(matches!(err, RsvpError::Configuration { .. }));
}

#[test]
fn wizard_starts_at_first_position() {
    let wizard = wizard_with(Arc::new(NullGateway));
    assert_eq!(wizard.position(), 0);
    assert_eq!(wizard.current_step(), StepId::Intro);
    assert!(!wizard.is_submitting());
}

#[test]
fn initial_answers_are_seeded() {
    let mut seed = AnswerRecord::default();
    seed.set(AnswerField::Travel, "Plane");

    let wizard = WizardBuilder::new()
        .with_initial_answers(seed.clone())
        .with_gateway(Arc::new(NullGateway))
        .build()
        .expect("build");
    assert_eq!(wizard.answers(), &seed);
}

#[test]
fn validity_for_choice_steps_tracks_field_presence() {
    let empty = AnswerRecord::default();
    let answered = answered_record();

    assert!(is_step_valid(StepId::Intro, &empty));
    for step in [
        StepId::NubianNight,
        StepId::Wedding,
        StepId::Travel,
        StepId::Accommodation,
        StepId::PostWedding,
    ] {
        assert!(!is_step_valid(step, &empty), "{step:?} empty must block");
        assert!(is_step_valid(step, &answered), "{step:?} answered must pass");
    }

    assert!(!is_step_valid(StepId::ReturnPlan, &empty));
    let mut with_plan = answered;
    with_plan.set(AnswerField::ReturnPlan, "Group Return");
    assert!(is_step_valid(StepId::ReturnPlan, &with_plan));
}

#[test]
fn contact_validity_needs_name_phone_and_attendees() {
    let mut record = AnswerRecord::default();
    assert!(!is_step_valid(StepId::Contact, &record));

    record.set(AnswerField::Name, "Sara");
    record.set(AnswerField::Phone, "12345");
    record.set(AnswerField::Attendees, "2");
    // Five digits is one short.
    assert!(!is_step_valid(StepId::Contact, &record));

    record.set(AnswerField::Phone, "123456");
    assert!(is_step_valid(StepId::Contact, &record));

    record.set(AnswerField::Attendees, "");
    assert!(!is_step_valid(StepId::Contact, &record));

    // Country code is never consulted.
    record.set(AnswerField::Attendees, "2");
    record.set(AnswerField::CountryCode, "other");
    assert!(is_step_valid(StepId::Contact, &record));
}

#[tokio::test]
async fn go_next_blocks_on_unanswered_step() {
    let mut wizard = wizard_with(Arc::new(NullGateway));
    assert!(matches!(wizard.go_next().await.expect("intro"), Advance::Moved));
    assert_eq!(wizard.current_step(), StepId::Travel);

    assert!(matches!(
        wizard.go_next().await.expect("blocked"),
        Advance::Blocked
    ));
    assert_eq!(wizard.current_step(), StepId::Travel);

    wizard.set_answer(AnswerField::Travel, "Plane");
    assert!(matches!(wizard.go_next().await.expect("moved"), Advance::Moved));
    assert_eq!(wizard.current_step(), StepId::Accommodation);
}

#[tokio::test]
async fn declining_post_wedding_skips_return_plan_both_ways() {
    let mut record = answered_record();
    record.set(AnswerField::PostWedding, "No — have to head back");

    let mut wizard = WizardBuilder::new()
        .with_initial_answers(record)
        .with_gateway(Arc::new(NullGateway))
        .build()
        .expect("build");

    advance_to(&mut wizard, StepId::PostWedding).await;
    assert!(matches!(wizard.go_next().await.expect("skip"), Advance::Moved));
    assert_eq!(wizard.current_step(), StepId::Contact);

    // Back re-derives the skip: return plan was never visited.
    assert_eq!(wizard.go_back(), Retreat::Moved);
    assert_eq!(wizard.current_step(), StepId::PostWedding);
}

#[tokio::test]
async fn accepting_post_wedding_visits_return_plan() {
    let mut wizard = WizardBuilder::new()
        .with_initial_answers(answered_record())
        .with_gateway(Arc::new(NullGateway))
        .build()
        .expect("build");

    advance_to(&mut wizard, StepId::PostWedding).await;
    assert!(matches!(wizard.go_next().await.expect("next"), Advance::Moved));
    assert_eq!(wizard.current_step(), StepId::ReturnPlan);

    wizard.set_answer(AnswerField::ReturnPlan, "Group Return");
    assert!(matches!(wizard.go_next().await.expect("next"), Advance::Moved));
    assert_eq!(wizard.current_step(), StepId::Contact);

    assert_eq!(wizard.go_back(), Retreat::Moved);
    assert_eq!(wizard.current_step(), StepId::ReturnPlan);
}

#[tokio::test]
async fn changing_the_answer_after_visiting_return_plan_still_skips_back() {
    let mut wizard = WizardBuilder::new()
        .with_initial_answers(answered_record())
        .with_gateway(Arc::new(NullGateway))
        .build()
        .expect("build");

    advance_to(&mut wizard, StepId::ReturnPlan).await;
    wizard.set_answer(AnswerField::ReturnPlan, "Own Return");
    advance_to(&mut wizard, StepId::Contact).await;

    // The branch condition is re-derived from current data on every call.
    wizard.set_answer(AnswerField::PostWedding, "No — have to head back");
    assert_eq!(wizard.go_back(), Retreat::Moved);
    assert_eq!(wizard.current_step(), StepId::PostWedding);
}

#[test]
fn go_back_at_first_position_exits_without_mutation() {
    let mut wizard = WizardBuilder::new()
        .with_initial_answers(answered_record())
        .with_gateway(Arc::new(NullGateway))
        .build()
        .expect("build");

    let before = wizard.answers().clone();
    assert_eq!(wizard.go_back(), Retreat::Exited);
    assert_eq!(wizard.position(), 0);
    assert_eq!(wizard.answers(), &before);
}

#[tokio::test]
async fn terminal_go_next_delivers_exactly_once() {
    let gateway = Arc::new(RecordingGateway::default());
    let mut record = answered_record();
    record.set(AnswerField::ReturnPlan, "Group Return");
    record.set(AnswerField::Name, "Sara");
    record.set(AnswerField::Phone, "1234567");
    record.set(AnswerField::Attendees, "2");

    let mut wizard = WizardBuilder::new()
        .with_initial_answers(record.clone())
        .with_gateway(Arc::clone(&gateway) as Arc<dyn SubmissionGateway>)
        .build()
        .expect("build");

    advance_to(&mut wizard, StepId::Contact).await;
    match wizard.go_next().await.expect("submit") {
        Advance::Submitted { answers, delivered } => {
            assert!(delivered);
            assert_eq!(answers, record);
        }
        other => panic!("expected submission, got {other:?}"),
    }

    assert_eq!(gateway.deliveries(), vec![record]);
    assert!(!wizard.is_submitting());
}

#[tokio::test]
async fn gateway_failure_still_completes_the_wizard() {
    let gateway = Arc::new(RecordingGateway::failing());
    let mut record = answered_record();
    record.set(AnswerField::ReturnPlan, "Group Return");
    record.set(AnswerField::Name, "Sara");
    record.set(AnswerField::Phone, "1234567");
    record.set(AnswerField::Attendees, "2");

    let mut wizard = WizardBuilder::new()
        .with_initial_answers(record.clone())
        .with_gateway(Arc::clone(&gateway) as Arc<dyn SubmissionGateway>)
        .build()
        .expect("build");

    advance_to(&mut wizard, StepId::Contact).await;
    match wizard.go_next().await.expect("submit") {
        Advance::Submitted { answers, delivered } => {
            assert!(!delivered, "failure must not surface as an error");
            assert_eq!(answers, record);
        }
        other => panic!("expected submission, got {other:?}"),
    }

    // Delivered once, never retried.
    assert_eq!(gateway.deliveries().len(), 1);
    assert!(!wizard.is_submitting());
}

#[tokio::test]
async fn contact_blocks_until_required_fields_are_present() {
    let mut record = AnswerRecord::default();
    record.set(AnswerField::Travel, "Plane");
    record.set(AnswerField::Accommodation, "No");
    record.set(AnswerField::NubianNight, "Not sure");
    record.set(AnswerField::Wedding, "Of course");
    record.set(AnswerField::PostWedding, "No — have to head back");

    let gateway = Arc::new(RecordingGateway::default());
    let mut wizard = WizardBuilder::new()
        .with_initial_answers(record)
        .with_gateway(Arc::clone(&gateway) as Arc<dyn SubmissionGateway>)
        .build()
        .expect("build");

    // The declining answer jumps straight from post-wedding to contact.
    advance_to(&mut wizard, StepId::PostWedding).await;
    assert!(matches!(wizard.go_next().await.expect("skip"), Advance::Moved));
    assert_eq!(wizard.position(), position_of(StepId::Contact));

    // Contact with an empty name is blocked, nothing is delivered.
    assert!(matches!(
        wizard.go_next().await.expect("blocked"),
        Advance::Blocked
    ));
    assert!(gateway.deliveries().is_empty());

    wizard.set_answer(AnswerField::Name, "Sam");
    wizard.set_answer(AnswerField::Phone, "5551234");
    wizard.set_answer(AnswerField::Attendees, "1");

    match wizard.go_next().await.expect("submit") {
        Advance::Submitted { answers, .. } => {
            assert_eq!(answers.post_wedding, "No — have to head back");
            assert_eq!(answers.return_plan, "", "skipped step stays empty");
            assert_eq!(answers.name, "Sam");
        }
        other => panic!("expected submission, got {other:?}"),
    }
    assert_eq!(gateway.deliveries().len(), 1);
}

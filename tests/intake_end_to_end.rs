//! End-to-end interview scenarios through the public API.

use std::sync::Arc;

use intake_readiness::adapters::{
    FixedAcknowledgements, PulldownExportService, TemplateDocumentGenerator,
};
use intake_readiness::application::IntakeConversation;
use intake_readiness::domain::analysis::{
    IntakeReport, ReadinessClassification, ReadinessScorer, ReadinessThresholds, SummaryFormat,
    SummaryGenerator,
};
use intake_readiness::domain::foundation::IntakeStatus;
use intake_readiness::domain::intake::{
    IntakeError, IntakeSession, KeywordValidator, MinimumLengthValidator, MonthYearValidator,
    QuestionCatalog, QuestionDefinition,
};
use intake_readiness::ports::{DocumentExportService, DocumentGenerator, GenerationOptions};

// ───────────────────────────────────────────────────────────────
// Fixtures
// ───────────────────────────────────────────────────────────────

/// Ten questions, every one validated, weights summing to 26.
fn validated_catalog() -> Arc<QuestionCatalog> {
    let q = |key: &str, prompt: &str, weight: u32| {
        QuestionDefinition::new(key, prompt, "", weight).unwrap()
    };
    let free_text = MinimumLengthValidator::non_trivial;
    Arc::new(
        QuestionCatalog::new(vec![
            q("country", "Country of birth?", 2).with_validator(free_text()),
            q("entry", "Date of last entry?", 3).with_validator(MonthYearValidator::new()),
            q("status", "Status at entry?", 2).with_validator(KeywordValidator::entry_status()),
            q("court", "Court proceedings?", 3).with_validator(KeywordValidator::history()),
            q("pending", "Pending applications?", 2).with_validator(KeywordValidator::history()),
            q("removal", "Ever removed?", 3).with_validator(KeywordValidator::history()),
            q("passport", "Valid passport?", 2).with_validator(KeywordValidator::yes_no()),
            q("documents", "Documents held?", 3).with_validator(free_text()),
            q("visa", "Visa details?", 3).with_validator(free_text()),
            q("asylum", "Asylum application date?", 3).with_validator(MonthYearValidator::new()),
        ])
        .unwrap(),
    )
}

const VALID_ANSWERS: [&str; 10] = [
    "Guatemala",
    "03/2021",
    "Student visa",
    "No, never",
    "None",
    "Yes, in 2019",
    "yes",
    "I-94 and work permit",
    "F-1 issued 2020",
    "March2022",
];

fn run(session: &mut IntakeSession, answers: &[&str]) {
    for answer in answers {
        session.submit_answer(*answer).unwrap();
    }
}

// ───────────────────────────────────────────────────────────────
// Scenarios
// ───────────────────────────────────────────────────────────────

#[test]
fn all_valid_answers_score_full_weight_and_pursue() {
    let catalog = validated_catalog();
    assert_eq!(catalog.total_weight(), 26);
    let mut session = IntakeSession::new(catalog);

    run(&mut session, &VALID_ANSWERS);

    assert_eq!(session.score(), 26);
    assert_eq!(session.status(), IntakeStatus::Complete);
    let classification =
        ReadinessScorer::classify(session.score(), &ReadinessThresholds::default());
    assert_eq!(classification, ReadinessClassification::Pursue);

    let summary = SummaryGenerator::summarize(&session, classification);
    assert_eq!(summary.headline, "Applicant is well-prepared for consultation.");
    assert!(summary.missing_prompts.is_empty());
    assert_eq!(summary.lines().len(), 1);
}

#[test]
fn only_first_three_valid_is_fail_without_missing_lines() {
    let mut session = IntakeSession::new(validated_catalog());

    run(&mut session, &VALID_ANSWERS[..3]);
    run(&mut session, &["?"; 7]);

    assert_eq!(session.score(), 7);
    assert_eq!(session.answers().len(), 10);
    let classification =
        ReadinessScorer::classify(session.score(), &ReadinessThresholds::default());
    assert_eq!(classification, ReadinessClassification::Fail);

    let summary = SummaryGenerator::summarize(&session, classification);
    assert_eq!(
        summary.headline,
        "Applicant appears unprepared; additional information gathering needed."
    );
    assert!(!summary.has_gaps());
}

#[test]
fn submit_after_completion_is_rejected_without_mutation() {
    let mut session = IntakeSession::new(validated_catalog());
    run(&mut session, &VALID_ANSWERS);
    let before = (session.score(), session.current_step(), session.answers().to_vec());

    let result = session.submit_answer("one more");

    assert!(matches!(result, Err(IntakeError::InvalidState(_))));
    assert_eq!(
        (session.score(), session.current_step(), session.answers().to_vec()),
        before
    );
}

#[test]
fn whitespace_answer_is_accepted_but_flagged_in_summary() {
    let catalog = Arc::new(
        QuestionCatalog::new(vec![
            QuestionDefinition::new("a", "First?", "", 1).unwrap(),
            QuestionDefinition::new("b", "Second?", "", 1).unwrap(),
        ])
        .unwrap(),
    );
    let mut session = IntakeSession::new(catalog);

    run(&mut session, &["   ", "fine"]);

    let summary = SummaryGenerator::summarize(&session, ReadinessClassification::Fail);
    assert_eq!(summary.missing_prompts, vec!["First?".to_string()]);
    assert_eq!(
        summary.render(SummaryFormat::Joined),
        "Applicant appears unprepared; additional information gathering needed. \
         - Missing response for: \"First?\""
    );
}

#[test]
fn standard_catalog_interview_through_conversation() {
    let catalog = Arc::new(QuestionCatalog::standard().unwrap());
    let mut conversation = IntakeConversation::new(
        catalog,
        Arc::new(FixedAcknowledgements::stock()),
        ReadinessThresholds::default(),
        SummaryFormat::Lines,
    );

    let answers = [
        "Mexico",
        "June 2019",
        "Tourist",
        "No",
        "None",
        "Never",
        "Yes",
        "I-94, passport",
        "B-2 visa issued 05/2019",
        "no",
    ];
    let mut last = None;
    for answer in answers {
        last = Some(conversation.respond(answer).unwrap());
    }

    // "no" is not a month and year, so the asylum question earns nothing
    let outcome = last.unwrap().outcome.unwrap();
    assert_eq!(outcome.score, 23);
    assert_eq!(outcome.max_score, 27);
    assert_eq!(outcome.classification, ReadinessClassification::Pursue);

    let report = conversation.report().unwrap();
    let markdown = TemplateDocumentGenerator::new()
        .generate(&report, &GenerationOptions::reviewer())
        .unwrap();
    assert!(markdown.starts_with("# Immigration Intake Summary"));
    assert!(markdown.contains("**Q1:** What country were you born in?"));
    assert!(markdown.contains("**A:** no *(needs review)*"));
}

#[tokio::test]
async fn answers_reach_html_export_as_literal_text() {
    let mut session = IntakeSession::new(validated_catalog());
    let mut answers = VALID_ANSWERS;
    answers[0] = "<script>alert(1)</script>";
    answers[7] = "Form <I-94> and *x* copies";
    run(&mut session, &answers);

    let report = IntakeReport::from_session(
        &session,
        &ReadinessThresholds::default(),
        SummaryFormat::Lines,
    )
    .unwrap();
    let markdown = TemplateDocumentGenerator::new()
        .generate(&report, &GenerationOptions::default())
        .unwrap();
    let html = PulldownExportService::new().to_html(&markdown).await.unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Form &lt;I-94&gt; and *x* copies"));
    assert!(!html.contains("<em>x</em>"));
}

#[test]
fn report_requires_completed_session() {
    let session = IntakeSession::new(validated_catalog());

    let result = IntakeReport::from_session(
        &session,
        &ReadinessThresholds::default(),
        SummaryFormat::Joined,
    );

    assert!(matches!(
        result,
        Err(IntakeError::NotComplete {
            answered: 0,
            total: 10
        })
    ));
}

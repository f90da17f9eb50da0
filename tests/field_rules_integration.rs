//! Behavioural integration tests for field validation rules.
//!
//! These tests exercise end-to-end scenarios for a host model layer that
//! attaches rules to fields, verifying that the complete flow from rule
//! construction through validation and diagnostics works correctly.

use fieldgate::rule::domain::{PresencePolicy, Transition, TypeShape};
use fieldgate::rule::engine::ValidationRule;
use fieldgate::rule::ports::condition::{Condition, RuleContext, Verdict};
use serde_json::{Value, json};

// ============================================================================
// Scenario: A well-formed ticket write passes every field rule
// ============================================================================

/// When a host checks a write against the rules attached to each field,
/// a well-formed ticket should pass all of them.
#[test]
fn well_formed_ticket_write_is_accepted() {
    // Arrange
    let mut title_length = ValidationRule::length_bounds(5, 100);
    let mut title_required = ValidationRule::required();
    let mut reporter_email = ValidationRule::email();
    let mut status_change = ValidationRule::allowed_transitions(vec![
        Transition::new("open", vec![json!("scheduled"), json!("closed")]),
        Transition::new("scheduled", vec![json!("closed")]),
    ]);

    let title = json!("Printer on fire");
    let reporter = json!("hola@davidvalin.com");
    let old_status = json!("open");
    let new_status = json!("scheduled");

    // Act
    let results = [
        title_length.is_valid(None, Some(&title)),
        title_required.is_valid(None, Some(&title)),
        reporter_email.is_valid(None, Some(&reporter)),
        status_change.is_valid(Some(&old_status), Some(&new_status)),
    ];

    // Assert
    assert!(
        results.iter().all(|&passed| passed),
        "every field rule should pass for a well-formed write"
    );
}

// ============================================================================
// Scenario: A disallowed status jump is rejected
// ============================================================================

/// When a write moves a status field outside the configured transitions,
/// the rule should reject it; transition failures carry no message.
#[test]
fn disallowed_status_jump_is_rejected() {
    // Arrange
    let mut status_change = ValidationRule::allowed_transitions(vec![Transition::new(
        "open",
        vec![json!("scheduled"), json!("closed")],
    )]);

    // Act
    let passed = status_change.is_valid(Some(&json!("closed")), Some(&json!("open")));

    // Assert
    assert!(!passed, "reopening a closed ticket should be rejected");
    assert_eq!(status_change.message(), "");
}

// ============================================================================
// Scenario: A too-short title is rejected with a diagnostic
// ============================================================================

/// When a write violates a length rule, the host reads the diagnostic
/// message back to surface it to the user.
#[test]
fn short_title_is_rejected_with_a_diagnostic() {
    // Arrange
    let mut title_length = ValidationRule::length_bounds(5, 100);

    // Act
    let passed = title_length.is_valid(None, Some(&json!("ab")));

    // Assert
    assert!(!passed);
    assert_eq!(title_length.message(), "ab is shorter than 5");
}

// ============================================================================
// Scenario: Rule configuration is loaded from a stored document
// ============================================================================

/// When rule configuration lives in a stored JSON document, the host can
/// deserialise it into descriptors and build rules from them.
#[test]
fn rules_can_be_built_from_stored_configuration() {
    // Arrange
    let transitions: Vec<Transition> = serde_json::from_value(json!([
        { "from": "open", "to": ["scheduled", "canceled", "closed"] }
    ]))
    .expect("transitions should deserialise");

    let shape: TypeShape = serde_json::from_value(json!({
        "_id": "string",
        "name": "string",
        "count": "number",
        "person": { "plop": "string" }
    }))
    .expect("shape should deserialise");

    let presence: PresencePolicy = serde_json::from_value(json!({
        "treat_zero_as_missing": false,
        "treat_false_as_missing": false,
        "treat_empty_string_as_missing": true
    }))
    .expect("policy should deserialise");

    let mut status_change = ValidationRule::allowed_transitions(transitions);
    let mut document_shape = ValidationRule::type_shape(shape);
    let mut count_required = ValidationRule::required_with_policy(presence);

    // Act & Assert
    assert!(status_change.is_valid(Some(&json!("open")), Some(&json!("canceled"))));
    assert!(document_shape.is_valid(
        None,
        Some(&json!({ "_id": "1", "name": "n", "count": 0, "person": { "plop": "p" } })),
    ));
    assert!(count_required.is_valid(None, Some(&json!(0))));
}

// ============================================================================
// Scenario: A custom condition composes with a built-in one
// ============================================================================

/// A host can implement the condition port itself and mix its conditions
/// with the built-ins; evaluation stays ordered and short-circuiting.
#[test]
fn custom_conditions_compose_with_builtins() {
    // Arrange
    struct EvenCount;
    impl Condition for EvenCount {
        fn evaluate(&self, context: &RuleContext<'_>) -> Verdict {
            let even = context
                .current()
                .and_then(Value::as_u64)
                .is_some_and(|count| count.is_multiple_of(2));
            if even {
                Verdict::pass()
            } else {
                Verdict::fail("count must be even")
            }
        }
    }

    let mut rule = ValidationRule::required_with_policy(PresencePolicy::null_only());
    rule.add_condition(Box::new(EvenCount));

    // Act & Assert
    assert!(rule.is_valid(None, Some(&json!(4))));

    assert!(!rule.is_valid(None, Some(&json!(3))));
    assert_eq!(rule.message(), "count must be even");

    // The required condition fails first; the custom one never runs.
    assert!(!rule.is_valid(None, None));
    assert_eq!(rule.message(), "A value is required and was not provided");
}

// ============================================================================
// Scenario: One rule instance is reused across many writes
// ============================================================================

/// Rule instances are long-lived; diagnostics from one write must never
/// leak into the next.
#[test]
fn rule_instances_are_reusable_across_writes() {
    // Arrange
    let mut reporter_email = ValidationRule::email();

    // Act & Assert
    assert!(!reporter_email.is_valid(None, Some(&json!("hola@como"))));
    assert_eq!(
        reporter_email.message(),
        "hola@como is not a valid email address"
    );

    assert!(reporter_email.is_valid(None, Some(&json!("si@si.com"))));
    assert_eq!(reporter_email.message(), "");

    assert!(!reporter_email.is_valid(None, Some(&json!("hola@@comoestas.com"))));
    assert_eq!(
        reporter_email.message(),
        "hola@@comoestas.com is not a valid email address"
    );
}

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use checkin::catalog::{CategoryKey, QUESTIONS};
use checkin::codec::{self, Comparison, TokenError};
use checkin::scorer::{self, Answers};
use rstest::rstest;

fn sample_answers() -> Answers {
    // Connection 4s, communication 2s, patterns 3s, vision 5s.
    let values = [4u8, 2, 3, 5];
    QUESTIONS
        .iter()
        .map(|q| (q.id, values[q.category.position()]))
        .collect()
}

fn token_for(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json)
}

#[test]
fn test_round_trip_preserves_scores() {
    let answers = sample_answers();
    let result = scorer::calculate_result(&answers);

    let token = codec::encode_scores(&answers);
    let decoded = codec::decode_scores(&token).expect("token should decode");

    assert_eq!(decoded, result);
    assert_eq!(decoded.scores(), [75, 25, 50, 100]);
    assert_eq!(decoded.focus_area, CategoryKey::Communication);
}

#[test]
fn test_token_is_fragment_safe() {
    let token = codec::encode_scores(&sample_answers());
    assert!(!token.is_empty());
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_token_carries_no_raw_answers() {
    let token = codec::encode_scores(&sample_answers());
    let json = String::from_utf8(URL_SAFE_NO_PAD.decode(token).unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["c", "f", "o", "v"]);
    assert_eq!(obj["c"].as_array().unwrap().len(), 4);
}

#[rstest]
#[case("not-a-token")]
#[case("")]
#[case("   ")]
#[case("####")]
#[case("eyJvIjo")] // truncated JSON
fn test_garbage_decodes_to_none(#[case] token: &str) {
    assert!(codec::decode_scores(token).is_none());
}

#[test]
fn test_wrong_shape_is_rejected() {
    let three = token_for(r#"{"o":50,"c":[50,50,50],"f":"vision","v":1}"#);
    assert!(matches!(codec::decode_token(&three), Err(TokenError::Shape(3))));

    let five = token_for(r#"{"o":50,"c":[50,50,50,50,50],"f":"vision","v":1}"#);
    assert!(codec::decode_scores(&five).is_none());
}

#[test]
fn test_out_of_range_score_is_rejected() {
    let token = token_for(r#"{"o":50,"c":[50,150,50,50],"f":"vision","v":1}"#);
    assert!(matches!(codec::decode_token(&token), Err(TokenError::Range(150))));
}

#[test]
fn test_unknown_focus_key_is_rejected() {
    let token = token_for(r#"{"o":50,"c":[50,50,50,50],"f":"romance","v":1}"#);
    assert!(matches!(codec::decode_token(&token), Err(TokenError::Payload(_))));
}

#[test]
fn test_future_order_version_is_rejected() {
    let token = token_for(r#"{"o":50,"c":[50,50,50,50],"f":"vision","v":2}"#);
    assert!(matches!(codec::decode_token(&token), Err(TokenError::Version(2))));
}

#[test]
fn test_browser_tokens_without_version_still_decode() {
    // Standard alphabet with padding, as produced by btoa().
    let token = STANDARD.encode(r#"{"o":63,"c":[100,0,100,50],"f":"communication"}"#);
    let decoded = codec::decode_scores(&token).unwrap();
    assert_eq!(decoded.overall, 63);
    assert_eq!(decoded.scores(), [100, 0, 100, 50]);
    assert_eq!(decoded.focus_area, CategoryKey::Communication);
    // Tiers are rebuilt from the scores.
    assert_eq!(
        decoded.category_score(CategoryKey::Vision).tier,
        scorer::Tier::Attention
    );
}

#[test]
fn test_link_fragment_and_whitespace_are_tolerated() {
    let token = codec::encode_scores(&sample_answers());
    let link = codec::share_link("https://example.org/", "/checkin", &token);
    assert_eq!(link, format!("https://example.org/checkin#{}", token));

    assert_eq!(codec::token_from_link(&link), token);
    assert_eq!(codec::token_from_link(&token), token);
    assert!(codec::decode_scores(&format!("  #{}\n", token)).is_some());
}

#[test]
fn test_comparison() {
    let mine = scorer::calculate_result(&sample_answers());
    let values = [2u8, 2, 3, 5];
    let partner_answers: Answers = QUESTIONS
        .iter()
        .map(|q| (q.id, values[q.category.position()]))
        .collect();
    let partner = scorer::calculate_result(&partner_answers);

    let cmp = Comparison::new(&mine, &partner);
    assert_eq!(cmp.categories[0].mine, 75);
    assert_eq!(cmp.categories[0].partner, 25);
    assert_eq!(cmp.categories[0].difference, 50);
    assert_eq!(cmp.largest_gap().category, CategoryKey::Connection);
    assert_eq!(
        cmp.overall_difference,
        mine.overall as i16 - partner.overall as i16
    );

    let same = Comparison::new(&mine, &mine);
    assert!(same.categories.iter().all(|c| c.difference == 0));
}

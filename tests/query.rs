mod common;

use common::init_logging;
use rri::base::field::KvError;
use rri::base::{Action, ContactType, DenicHandle, Entity, FieldName};
use rri::data::{ContactData, DomainData, VerificationInformation};
use rri::query::ParseError;
use rri::{Config, Query};
use rstest::rstest;
use time::{Date, Month};

fn domain_data() -> DomainData {
    DomainData {
        holder_handles: vec![
            DenicHandle::new(1000006, "holder"),
            DenicHandle::new(1000006, "co-holder"),
        ],
        general_request_handles: vec![DenicHandle::new(1000006, "gr")],
        abuse_contact_handles: vec![DenicHandle::new(1000006, "abuse")],
        name_servers: vec![
            "ns1.example.de".into(),
            "ns2.example.de".into(),
        ],
    }
}

fn contact_data() -> ContactData {
    ContactData {
        name: "Erika Mustermann".into(),
        organisation: "Muster GmbH\nAbteilung IT".into(),
        address: "Musterweg 1".into(),
        postal_code: "60329".into(),
        city: "Frankfurt am Main".into(),
        country_code: "DE".into(),
        email: vec!["erika@example.de".into()],
        phone: "+49.69123456".into(),
        verification_information: vec![
            VerificationInformation {
                verified_claims: vec!["name".into(), "address".into()],
                result: "SUCCESS".into(),
                method: "ID-CARD".into(),
                ..Default::default()
            },
            VerificationInformation {
                verified_claims: vec!["email".into()],
                result: "SUCCESS".into(),
                ..Default::default()
            },
        ],
        ..ContactData::new(ContactType::Person)
    }
}

fn expire() -> Date {
    Date::from_calendar_date(2026, Month::December, 24).unwrap()
}

/// Returns every typed query together with its expected action.
fn all_queries(config: &Config) -> Vec<(Query, Action)> {
    let handle = DenicHandle::new(1000006, "some-code");
    vec![
        (Query::login(config, "alice", "secret"), Action::LOGIN),
        (Query::logout(config), Action::LOGOUT),
        (
            Query::create_contact(config, &handle, &contact_data()),
            Action::CREATE,
        ),
        (
            Query::update_contact(config, &handle, &contact_data()),
            Action::UPDATE,
        ),
        (Query::check_handle(config, &handle), Action::CHECK),
        (Query::info_handle(config, &handle), Action::INFO),
        (
            Query::create_domain(config, "münchen.de", &domain_data()),
            Action::CREATE,
        ),
        (Query::check_domain(config, "example.de"), Action::CHECK),
        (Query::info_domain(config, "example.de"), Action::INFO),
        (
            Query::update_domain(config, "example.de", &domain_data()),
            Action::UPDATE,
        ),
        (
            Query::change_holder(config, "example.de", &domain_data()),
            Action::CHANGE_HOLDER,
        ),
        (Query::delete_domain(config, "example.de"), Action::DELETE),
        (Query::restore_domain(config, "example.de"), Action::RESTORE),
        (
            Query::transit_domain(config, "example.de", true),
            Action::TRANSIT,
        ),
        (
            Query::create_authinfo1(config, "example.de", "s3cret", expire()),
            Action::CREATE_AUTHINFO1,
        ),
        (
            Query::create_authinfo2(config, "example.de"),
            Action::CREATE_AUTHINFO2,
        ),
        (
            Query::change_provider(
                config,
                "example.de",
                "s3cret",
                &domain_data(),
            ),
            Action::CHANGE_PROVIDER,
        ),
        (Query::queue_read(config, None), Action::QUEUE_READ),
        (
            Query::queue_delete(config, "4711", Some("chprovAuthInfo")),
            Action::QUEUE_DELETE,
        ),
    ]
}

#[rstest]
#[case::latest(Config::new(), "5.0")]
#[case::older(Config::with_version("4.0"), "4.0")]
fn constructors_set_version_and_action(
    #[case] config: Config,
    #[case] version: &str,
) {
    init_logging();
    for (query, action) in all_queries(&config) {
        assert_eq!(query.version(), version);
        assert_eq!(query.action(), action);

        let mut fields = query.fields().iter();
        assert_eq!(
            fields.next().and_then(|field| field.as_value()),
            Some((&FieldName::VERSION, version))
        );
        assert_eq!(
            fields.next().and_then(|field| field.as_value()),
            Some((&FieldName::ACTION, action.as_str()))
        );
        assert_eq!(query.field(FieldName::VERSION).len(), 1);
        assert_eq!(query.field(FieldName::ACTION).len(), 1);
    }
}

#[test]
fn encode_parse_round_trip() {
    init_logging();
    for (query, _) in all_queries(&Config::new()) {
        let encoded = query.encode_kv();
        assert!(!encoded.ends_with('\n'));
        let parsed = Query::parse(&encoded).unwrap();
        assert_eq!(parsed, query, "round trip of {}", query);
        assert_eq!(parsed.version(), query.version());
        assert_eq!(parsed.action(), query.action());
        for field in query.fields() {
            if let Some((name, _)) = field.as_value() {
                assert_eq!(parsed.field(name), query.field(name));
            }
        }
    }
}

#[test]
fn parse_login() {
    init_logging();
    let query = Query::parse_kv(
        "version: 5.0\naction: LOGIN\nuser: alice\npassword: secret",
    )
    .unwrap();
    assert_eq!(query.version(), "5.0");
    assert_eq!(query.action(), "LOGIN");
    assert_eq!(query.first_field("user"), "alice");
    assert_eq!(query.first_field("password"), "secret");
    assert_eq!(query.first_field("holder"), "");
    assert_eq!(query.to_string(), "LOGIN{\"alice\"}");

    // Field names only known at run time.
    let name = String::from("User");
    assert_eq!(query.first_field(name.as_str()), "alice");
    assert_eq!(query.field(&*name), ["alice"]);
}

#[test]
fn parse_is_lenient_on_whitespace_and_case() {
    init_logging();
    let query: Query = "\r\n  VERSION :5.0  \r\n\r\n Action: info \r\n\
                        Domain: example.de\r\nnote: a: b\r\n"
        .parse()
        .unwrap();
    assert_eq!(query.action(), Action::INFO);
    assert_eq!(query.first_field("domain"), "example.de");
    assert_eq!(query.first_field("note"), "a: b");
}

#[rstest]
#[case::missing_version(
    "action: LOGIN",
    ParseError::MissingField(FieldName::VERSION)
)]
#[case::missing_action(
    "version: 5.0\nuser: alice",
    ParseError::MissingField(FieldName::ACTION)
)]
#[case::empty("", ParseError::MissingField(FieldName::VERSION))]
#[case::duplicate_version(
    "version: 5.0\nversion: 5.0\naction: LOGIN",
    ParseError::DuplicateField(FieldName::VERSION)
)]
#[case::duplicate_action(
    "version: 5.0\naction: LOGIN\naction: LOGOUT",
    ParseError::DuplicateField(FieldName::ACTION)
)]
#[case::no_colon(
    "garbage-no-colon",
    ParseError::Kv(KvError::MalformedLine { line: 1 })
)]
#[case::no_colon_later(
    "version: 5.0\naction: LOGIN\nuser alice",
    ParseError::Kv(KvError::MalformedLine { line: 3 })
)]
fn parse_errors(#[case] input: &str, #[case] err: ParseError) {
    init_logging();
    assert_eq!(Query::parse(input), Err(err));
}

#[test]
fn create_authinfo1() {
    let query = Query::create_authinfo1(
        &Config::new(),
        "example.de",
        "s3cret",
        expire(),
    );
    assert_eq!(
        query.first_field(FieldName::AUTHINFO_HASH),
        "1ec1c26b50d5d3c58d9583181af8076655fe00756bf7285940ba3670f99fcba0"
    );
    assert_eq!(query.first_field(FieldName::AUTHINFO_EXPIRE), "20261224");
    assert_eq!(query.field(FieldName::AUTHINFO).len(), 0);
    assert!(!query.encode_kv().contains("s3cret"));
}

#[test]
fn create_domain() {
    let query = Query::create_domain(
        &Config::new(),
        "xn--mnchen-3ya.de",
        &domain_data(),
    );
    assert_eq!(
        query.encode_kv(),
        "version: 5.0\n\
         action: CREATE\n\
         domain-ace: xn--mnchen-3ya.de\n\
         domain: münchen.de\n\
         holder: DENIC-1000006-HOLDER\n\
         holder: DENIC-1000006-CO-HOLDER\n\
         generalrequest: DENIC-1000006-GR\n\
         abusecontact: DENIC-1000006-ABUSE\n\
         nserver: ns1.example.de\n\
         nserver: ns2.example.de"
    );
}

#[test]
fn change_provider_puts_authinfo_last() {
    let query = Query::change_provider(
        &Config::new(),
        "example.de",
        "s3cret",
        &domain_data(),
    );
    let last = query.fields().iter().last().and_then(|f| f.as_value());
    assert_eq!(last, Some((&FieldName::AUTHINFO, "s3cret")));
}

#[test]
fn transit_domain() {
    let config = Config::new();
    assert_eq!(
        Query::transit_domain(&config, "example.de", true)
            .first_field(FieldName::DISCONNECT),
        "true"
    );
    assert_eq!(
        Query::transit_domain(&config, "example.de", false)
            .first_field(FieldName::DISCONNECT),
        "false"
    );
}

#[test]
fn contact_round_trip_keeps_entities() {
    init_logging();
    let handle = DenicHandle::new(1000006, "erika");
    let query =
        Query::create_contact(&Config::new(), &handle, &contact_data());
    assert_eq!(query.first_field("handle"), "DENIC-1000006-ERIKA");
    assert_eq!(query.first_field("type"), "PERSON");
    assert_eq!(
        query.field("organisation"),
        ["Muster GmbH", "Abteilung IT"]
    );

    let parsed = Query::parse(&query.encode_kv()).unwrap();
    let blocks: Vec<_> = parsed.fields().entity_blocks().collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks
        .iter()
        .all(|(entity, _)| **entity == Entity::VERIFICATION_INFORMATION));
    assert_eq!(blocks[0].1.len(), 4);
    assert_eq!(blocks[1].1.len(), 2);
    assert_eq!(parsed, query);
}

#[rstest]
#[case::none(None, None)]
#[case::empty(Some(""), None)]
#[case::filtered(Some("chprovAuthInfo"), Some("chprovAuthInfo"))]
fn queue_msg_type(
    #[case] msg_type: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let config = Config::new();
    let read = Query::queue_read(&config, msg_type);
    let delete = Query::queue_delete(&config, "17", msg_type);
    assert_eq!(delete.first_field(FieldName::MSG_ID), "17");
    for query in [read, delete] {
        assert_eq!(
            query.field(FieldName::MSG_TYPE).first().copied(),
            expected
        );
    }
}

#[test]
fn empty_handle_is_sent_as_empty_value() {
    let query = Query::check_handle(&Config::new(), &DenicHandle::EMPTY);
    assert_eq!(query.field(FieldName::HANDLE), [""]);
}

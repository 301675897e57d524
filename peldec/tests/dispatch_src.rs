use peldec::testing::{FixedDecoder, RecordingDecoder};
use peldec::{
    ComponentId, EMPTY_SRC_DETAILS, MapRegistryBuilder, RegistryBuilder, SrcData, SrcDecoder,
    SrcDispatcher,
};

const WORDS: [&str; 8] = [
    "02020202", "03030303", "04040404", "05050505", "06060606", "07070707", "08080808", "09090909",
];

fn dispatcher_with(
    entries: Vec<(&str, Box<dyn SrcDecoder>)>,
) -> SrcDispatcher<peldec::MapRegistry<ComponentId, Box<dyn SrcDecoder>>> {
    let mut builder: MapRegistryBuilder<ComponentId, Box<dyn SrcDecoder>> =
        MapRegistryBuilder::default();
    for (id, decoder) in entries {
        builder.insert(id.parse().unwrap(), decoder).unwrap();
    }
    SrcDispatcher::new(builder.build().unwrap())
}

#[test]
fn unregistered_component_yields_the_empty_value_token() {
    // No decoder registered for id "e5".
    let dispatcher = dispatcher_with(Vec::new());

    let out = dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS));
    assert_eq!(out, "\"\"");
    assert_eq!(out, EMPTY_SRC_DETAILS);
}

#[test]
fn registered_decoder_output_passes_through_byte_for_byte() {
    let dispatcher = dispatcher_with(vec![(
        "e5",
        Box::new(FixedDecoder::new(r#"{"Field A": "X"}"#)) as Box<dyn SrcDecoder>,
    )]);

    let out = dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS));
    assert_eq!(out, r#"{"Field A": "X"}"#);
}

#[test]
fn component_id_match_is_case_insensitive() {
    // Registered under uppercase, referenced in lowercase.
    let dispatcher = dispatcher_with(vec![(
        "E5",
        Box::new(FixedDecoder::new(r#"{"Hit": 1}"#)) as Box<dyn SrcDecoder>,
    )]);

    assert_eq!(
        dispatcher.dispatch(&SrcData::new("BMC1e50012345678", WORDS)),
        r#"{"Hit": 1}"#
    );
    assert_eq!(
        dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS)),
        r#"{"Hit": 1}"#
    );
}

#[test]
fn short_reference_code_yields_the_empty_value_token() {
    let dispatcher = dispatcher_with(vec![(
        "e5",
        Box::new(FixedDecoder::new(r#"{"Hit": 1}"#)) as Box<dyn SrcDecoder>,
    )]);

    assert_eq!(
        dispatcher.dispatch(&SrcData::new("BMC1", WORDS)),
        EMPTY_SRC_DETAILS
    );
}

#[test]
fn decoder_sees_the_reference_code_it_was_dispatched() {
    let recorder = RecordingDecoder::new(r#"{"Seen": 1}"#);
    let handle = recorder.clone();
    let dispatcher = dispatcher_with(vec![("e5", Box::new(recorder) as Box<dyn SrcDecoder>)]);

    dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS));

    assert_eq!(handle.count(), 1);
    assert_eq!(handle.seen(), ["BMC1E50012345678"]);
}

#[test]
fn dispatch_is_idempotent() {
    let dispatcher = dispatcher_with(vec![(
        "e5",
        Box::new(FixedDecoder::new(r#"{"Field A": "X"}"#)) as Box<dyn SrcDecoder>,
    )]);
    let src = SrcData::new("BMC1E50012345678", WORDS);

    assert_eq!(dispatcher.dispatch(&src), dispatcher.dispatch(&src));

    let miss = SrcData::new("BMC1FF0012345678", WORDS);
    assert_eq!(dispatcher.dispatch(&miss), dispatcher.dispatch(&miss));
}

#[test]
fn dispatcher_is_shareable_across_threads() {
    let dispatcher = std::sync::Arc::new(dispatcher_with(vec![(
        "e5",
        Box::new(FixedDecoder::new(r#"{"Hit": 1}"#)) as Box<dyn SrcDecoder>,
    )]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            std::thread::spawn(move || dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), r#"{"Hit": 1}"#);
    }
}

#[test]
fn builtin_e500_decoder_is_registerable_like_any_plugin() {
    let dispatcher = dispatcher_with(vec![(
        peldec::components::e500::COMPONENT,
        Box::new(peldec::components::e500::E500SrcDecoder) as Box<dyn SrcDecoder>,
    )]);

    let src = SrcData::new(
        "BMC1E50012345678",
        [
            "00000000", "00000000", "00000000", "00000000", "00200010", "00020003", "abcd0116",
            "00000000",
        ],
    );
    let out = dispatcher.dispatch(&src);

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["Attention Type"], "Recoverable");
    assert_eq!(parsed["Chip Position"], 2);
}

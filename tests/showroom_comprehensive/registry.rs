//! Name resolution, argument marshaling and metadata.

use carshowroom::{Command, Error, Executor, Output, ShowroomConfig, TransactionIntent};

use crate::{args, executor, expect_car};

#[test]
fn every_command_resolves() {
    let executor = executor();
    for name in [
        "initLedger",
        "createCar",
        "carExists",
        "queryCar",
        "transferCarOwnership",
        "queryAllCars",
    ] {
        assert_eq!(executor.registry().resolve(name).unwrap().name, name);
        let qualified = format!("carshowroom:{}", name);
        assert_eq!(executor.registry().resolve(&qualified).unwrap().name, name);
    }
}

#[test]
fn names_are_case_sensitive() {
    let executor = executor();
    assert!(matches!(
        executor.invoke("querycar", &args(&["CAR001"])),
        Err(Error::UnknownTransaction { .. })
    ));
}

#[test]
fn arity_is_checked_for_every_transaction() {
    let executor = executor();
    let too_many = args(&["a", "b", "c", "d", "e", "f", "g"]);
    for entry in executor.registry().entries() {
        let err = executor.invoke(entry.name, &too_many).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }), "{}", entry.name);
    }
    assert_eq!(executor.ledger().store().current_version(), 0);
}

#[test]
fn year_accepts_any_integer() {
    let executor = executor();
    let car = expect_car(
        executor
            .invoke("createCar", &args(&["OLD", "Benz", "Patent", "Black", "1886", "Karl"]))
            .unwrap(),
    );
    assert_eq!(car.year(), 1886);

    let err = executor
        .invoke("createCar", &args(&["NEW", "a", "b", "c", "2020.5", "d"]))
        .unwrap_err();
    assert_eq!(err.label(), "INVALID_ARGUMENT");
}

#[test]
fn metadata_lists_transactions_and_intents() {
    let executor = executor();
    let metadata = match executor.execute(Command::Metadata).unwrap() {
        Output::Metadata(metadata) => metadata,
        other => panic!("unexpected output: {other:?}"),
    };

    assert_eq!(metadata.info.name, "carshowroom");
    assert_eq!(metadata.info.title, "Car Showroom Contract");
    assert_eq!(metadata.info.version, "1.0.0");
    assert_eq!(metadata.info.contact.email, "carshowroom@example.com");

    let submit: Vec<&str> = metadata
        .transactions
        .iter()
        .filter(|t| t.intent == TransactionIntent::Submit)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(submit, vec!["createCar", "initLedger", "transferCarOwnership"]);
}

#[test]
fn metadata_json_shape() {
    let executor = executor();
    let json = serde_json::to_value(executor.metadata()).unwrap();
    assert_eq!(json["info"]["license"]["name"], "Apache 2.0 License");
    let query = json["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "queryCar")
        .unwrap();
    assert_eq!(query["intent"], "evaluate");
    assert_eq!(query["parameters"], serde_json::json!(["id"]));
}

#[test]
fn config_file_drives_executor() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(carshowroom::CONFIG_FILE_NAME);
    std::fs::write(&path, "contract_name = \"lot\"\nseed_on_open = true\n").unwrap();

    let config = ShowroomConfig::from_file(&path).unwrap();
    let executor = Executor::from_config(&config).unwrap();

    assert_eq!(
        executor.invoke("lot:carExists", &args(&["CAR004"])).unwrap(),
        Output::Bool(true)
    );
}

//! Create / query / transfer / seed scenarios.

use carshowroom::{Car, Command, ErrorKind, Output, SAMPLE_CARS};

use crate::{args, executor, expect_car, expect_cars};

#[test]
fn concrete_scenario() {
    let executor = executor();

    let created = expect_car(
        executor
            .invoke(
                "createCar",
                &args(&["CAR001", "Toyota", "Corolla", "Blue", "2020", "John"]),
            )
            .unwrap(),
    );
    let corolla = Car::new("CAR001", "Toyota", "Corolla", "Blue", 2020, "John");
    assert_eq!(created, corolla);

    let queried = expect_car(executor.invoke("queryCar", &args(&["CAR001"])).unwrap());
    assert_eq!(queried, corolla);

    let transferred = expect_car(
        executor
            .invoke("transferCarOwnership", &args(&["CAR001", "Amy"]))
            .unwrap(),
    );
    assert_eq!(transferred, corolla.clone().with_owner("Amy"));

    let err = executor
        .invoke(
            "createCar",
            &args(&["CAR001", "Honda", "Civic", "Red", "2021", "Sarah"]),
        )
        .unwrap_err();
    assert_eq!(err.chaincode_kind(), Some(ErrorKind::RecordAlreadyExists));
    assert_eq!(
        expect_car(executor.invoke("queryCar", &args(&["CAR001"])).unwrap()).owner(),
        "Amy"
    );

    let err = executor.invoke("queryCar", &args(&["CAR999"])).unwrap_err();
    assert_eq!(err.chaincode_kind(), Some(ErrorKind::RecordNotFound));
}

#[test]
fn seed_on_empty_then_again() {
    let executor = executor();
    assert_eq!(
        executor.execute(Command::InitLedger).unwrap(),
        Output::initialized(5)
    );
    let version = executor.ledger().store().current_version();

    assert_eq!(
        executor.execute(Command::InitLedger).unwrap(),
        Output::initialized(0)
    );
    assert_eq!(executor.ledger().store().current_version(), version);

    let cars = expect_cars(executor.execute(Command::QueryAllCars).unwrap());
    let expected: Vec<Car> = SAMPLE_CARS.iter().map(|s| s.to_car()).collect();
    assert_eq!(cars, expected);
}

#[test]
fn exists_stays_true() {
    let executor = executor();
    let exists = |id: &str| executor.execute(Command::CarExists { id: id.into() }).unwrap();

    assert_eq!(exists("CAR001"), Output::Bool(false));
    executor.execute(Command::InitLedger).unwrap();
    assert_eq!(exists("CAR001"), Output::Bool(true));

    executor
        .execute(Command::TransferCarOwnership {
            id: "CAR001".into(),
            new_owner: "Amy".into(),
        })
        .unwrap();
    assert_eq!(exists("CAR001"), Output::Bool(true));
}

#[test]
fn transfer_missing_writes_nothing() {
    let executor = executor();
    let err = executor
        .execute(Command::TransferCarOwnership {
            id: "CAR404".into(),
            new_owner: "Amy".into(),
        })
        .unwrap_err();
    assert_eq!(err.label(), "RECORD_NOT_FOUND");
    assert!(executor.ledger().store().is_empty());
}

#[test]
fn transfer_to_same_owner_is_allowed() {
    let executor = executor();
    executor.execute(Command::InitLedger).unwrap();
    let car = expect_car(
        executor
            .invoke("transferCarOwnership", &args(&["CAR002", "Sarah"]))
            .unwrap(),
    );
    assert_eq!(car, SAMPLE_CARS[1].to_car());
}

fn create_with_id(id: &str) -> Command {
    Command::CreateCar {
        id: id.to_string(),
        make: "m".into(),
        model: "m".into(),
        color: "c".into(),
        year: 2000,
        owner: "o".into(),
    }
}

#[test]
fn ids_are_opaque() {
    let executor = executor();
    for id in ["car 1", "ÄÖÜ", "a:b"] {
        executor.execute(create_with_id(id)).unwrap();
    }
    let cars = expect_cars(executor.execute(Command::QueryAllCars).unwrap());
    let ids: Vec<&str> = cars.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["a:b", "car 1", "ÄÖÜ"]);
}

#[test]
fn empty_id_is_rejected_by_ledger() {
    let executor = executor();
    let err = executor.execute(create_with_id("")).unwrap_err();
    assert_eq!(err.label(), "INVALID_ARGUMENT");
    assert!(executor.ledger().store().is_empty());
}

#[test]
fn corrupt_value_fails_scan_and_query() {
    let executor = executor();
    executor.execute(Command::InitLedger).unwrap();
    executor.ledger().write_raw("CAR003", "{\"id\":\"CAR003\"}");

    let err = executor.execute(Command::QueryAllCars).unwrap_err();
    assert_eq!(err.chaincode_kind(), Some(ErrorKind::CorruptRecord));
    let err = executor.invoke("queryCar", &args(&["CAR003"])).unwrap_err();
    assert_eq!(err.label(), "CORRUPT_RECORD");
    let err = executor
        .invoke("transferCarOwnership", &args(&["CAR003", "Amy"]))
        .unwrap_err();
    assert_eq!(err.label(), "CORRUPT_RECORD");

    assert_eq!(executor.ledger().open_iterators(), 0);
    assert_eq!(executor.ledger().leaked_iterators(), 0);
}

#[test]
fn empty_value_is_skipped_by_scan() {
    let executor = executor();
    executor.execute(Command::InitLedger).unwrap();
    executor.ledger().write_raw("CAR000", "");

    let cars = expect_cars(executor.execute(Command::QueryAllCars).unwrap());
    assert_eq!(cars.len(), 5);
    assert_eq!(
        executor
            .execute(Command::CarExists {
                id: "CAR000".into()
            })
            .unwrap(),
        Output::Bool(false)
    );
}

#[test]
fn stored_value_is_car_json() {
    let executor = executor();
    executor.execute(Command::InitLedger).unwrap();
    let raw = executor.ledger().get_committed("CAR005").unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["model"], "Model 3");
    assert_eq!(value["year"], 2021);
    assert_eq!(value["owner"], "David");
}

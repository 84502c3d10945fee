//! Conflicting transactions and threads sharing one ledger.

use std::sync::Arc;
use std::thread;

use carshowroom::{Car, CarShowroomContract, Command, ErrorKind, Executor, Ledger, Output};

use crate::{args, expect_car, expect_cars};

fn corolla() -> Car {
    Car::new("CAR001", "Toyota", "Corolla", "Blue", 2020, "John")
}

#[test]
fn second_transfer_of_same_version_conflicts() {
    let ledger = Ledger::new();
    let contract = CarShowroomContract::new();
    ledger.submit(|txn| contract.create_car(txn, corolla())).unwrap();

    let mut amy = ledger.begin();
    let mut bob = ledger.begin();
    contract.transfer_car_ownership(&mut amy, "CAR001", "Amy").unwrap();
    contract.transfer_car_ownership(&mut bob, "CAR001", "Bob").unwrap();

    ledger.commit(amy).unwrap();
    let err = ledger.commit(bob).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MvccReadConflict);

    let stored = ledger.evaluate(|txn| contract.query_car(txn, "CAR001")).unwrap();
    assert_eq!(stored, corolla().with_owner("Amy"));
}

#[test]
fn concurrent_creates_of_same_id_conflict() {
    let ledger = Ledger::new();
    let contract = CarShowroomContract::new();

    let mut first = ledger.begin();
    let mut second = ledger.begin();
    contract.create_car(&mut first, corolla()).unwrap();
    contract
        .create_car(&mut second, corolla().with_owner("Eve"))
        .unwrap();

    ledger.commit(first).unwrap();
    assert_eq!(
        ledger.commit(second).unwrap_err().kind(),
        ErrorKind::MvccReadConflict
    );
    let stored = ledger.evaluate(|txn| contract.query_car(txn, "CAR001")).unwrap();
    assert_eq!(stored.owner(), "John");
}

#[test]
fn scan_then_write_conflicts_with_concurrent_insert() {
    let ledger = Ledger::new();
    let contract = CarShowroomContract::new();
    ledger.submit(|txn| contract.init_ledger(txn)).unwrap();

    let mut audit = ledger.begin();
    let seen = contract.query_all_cars(&mut audit).unwrap();
    assert_eq!(seen.len(), 5);
    contract
        .create_car(&mut audit, Car::new("CAR100", "a", "b", "c", 1, "d"))
        .unwrap();

    ledger
        .submit(|txn| contract.create_car(txn, Car::new("CAR006", "e", "f", "g", 2, "h")))
        .unwrap();

    assert_eq!(
        ledger.commit(audit).unwrap_err().kind(),
        ErrorKind::MvccReadConflict
    );
    assert!(ledger.get_committed("CAR100").is_none());
}

#[test]
fn read_only_scan_commits_despite_concurrent_insert() {
    let ledger = Ledger::new();
    let contract = CarShowroomContract::new();
    ledger.submit(|txn| contract.init_ledger(txn)).unwrap();

    let mut reader = ledger.begin();
    contract.query_all_cars(&mut reader).unwrap();
    ledger
        .submit(|txn| contract.create_car(txn, Car::new("CAR006", "e", "f", "g", 2, "h")))
        .unwrap();

    assert_eq!(ledger.commit(reader).unwrap().writes, 0);
}

#[test]
fn threads_creating_distinct_ids_all_commit() {
    let executor = Arc::new(Executor::new(Arc::new(Ledger::new())));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                for i in 0..25 {
                    let id = format!("T{}-{:03}", t, i);
                    executor
                        .invoke("createCar", &args(&[id.as_str(), "Make", "Model", "Red", "2000", "Owner"]))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let cars = expect_cars(executor.execute(Command::QueryAllCars).unwrap());
    assert_eq!(cars.len(), 200);
    assert_eq!(executor.ledger().leaked_iterators(), 0);
}

#[test]
fn threads_transferring_same_car_keep_it_consistent() {
    let executor = Arc::new(Executor::new(Arc::new(Ledger::new())));
    executor.execute(Command::InitLedger).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                let owner = format!("owner-{}", t);
                let mut committed = Vec::new();
                for _ in 0..20 {
                    match executor.invoke("transferCarOwnership", &args(&["CAR001", owner.as_str()])) {
                        Ok(_) => committed.push(owner.clone()),
                        Err(e) => {
                            assert_eq!(e.chaincode_kind(), Some(ErrorKind::MvccReadConflict))
                        }
                    }
                }
                committed
            })
        })
        .collect();

    let mut winners = Vec::new();
    for handle in handles {
        winners.extend(handle.join().unwrap());
    }
    assert!(!winners.is_empty());

    let car = expect_car(executor.invoke("queryCar", &args(&["CAR001"])).unwrap());
    assert!(winners.contains(&car.owner().to_string()));
    assert_eq!(car.clone().with_owner("John"), carshowroom::SAMPLE_CARS[0].to_car());
}

#[test]
fn concurrent_seeding_creates_each_sample_once() {
    let executor = Arc::new(Executor::new(Arc::new(Ledger::new())));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || match executor.execute(Command::InitLedger) {
                Ok(Output::Initialized { created, .. }) => created,
                Ok(other) => panic!("unexpected output: {other:?}"),
                Err(e) => {
                    assert_eq!(e.chaincode_kind(), Some(ErrorKind::MvccReadConflict));
                    0
                }
            })
        })
        .collect();
    let created: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(created, 5);
    let cars = expect_cars(executor.execute(Command::QueryAllCars).unwrap());
    assert_eq!(cars.len(), 5);
}

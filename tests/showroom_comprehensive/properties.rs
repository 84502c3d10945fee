//! Operation sequences checked against a `BTreeMap` model.

use std::collections::BTreeMap;

use carshowroom::{Car, Command, ErrorKind, Output};
use proptest::prelude::*;

use crate::{executor, expect_car, expect_cars};

#[derive(Debug, Clone)]
enum Op {
    Create { id: String, owner: String, year: i32 },
    Transfer { id: String, owner: String },
    Query { id: String },
    Exists { id: String },
    Seed,
}

fn id_strategy() -> impl Strategy<Value = String> {
    // Small id space so creates collide and transfers hit existing cars
    prop_oneof![
        (1u8..=7).prop_map(|n| format!("CAR{:03}", n)),
        "[A-Z]{1,3}",
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (id_strategy(), "[A-Za-z]{1,6}", 1900i32..2030)
            .prop_map(|(id, owner, year)| Op::Create { id, owner, year }),
        (id_strategy(), "[A-Za-z ]{0,6}").prop_map(|(id, owner)| Op::Transfer { id, owner }),
        id_strategy().prop_map(|id| Op::Query { id }),
        id_strategy().prop_map(|id| Op::Exists { id }),
        Just(Op::Seed),
    ]
}

fn model_car(id: &str, owner: &str, year: i32) -> Car {
    Car::new(id, "Make", "Model", "Color", year, owner)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn executor_matches_model(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let executor = executor();
        let mut model: BTreeMap<String, Car> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Create { id, owner, year } => {
                    let result = executor.execute(Command::CreateCar {
                        id: id.clone(),
                        make: "Make".into(),
                        model: "Model".into(),
                        color: "Color".into(),
                        year,
                        owner: owner.clone(),
                    });
                    if model.contains_key(&id) {
                        prop_assert_eq!(
                            result.unwrap_err().chaincode_kind(),
                            Some(ErrorKind::RecordAlreadyExists)
                        );
                    } else {
                        let car = model_car(&id, &owner, year);
                        prop_assert_eq!(expect_car(result.unwrap()), car.clone());
                        model.insert(id, car);
                    }
                }
                Op::Transfer { id, owner } => {
                    let result = executor.execute(Command::TransferCarOwnership {
                        id: id.clone(),
                        new_owner: owner.clone(),
                    });
                    match model.get_mut(&id) {
                        Some(car) => {
                            car.set_owner(owner);
                            prop_assert_eq!(expect_car(result.unwrap()), car.clone());
                        }
                        None => prop_assert_eq!(
                            result.unwrap_err().chaincode_kind(),
                            Some(ErrorKind::RecordNotFound)
                        ),
                    }
                }
                Op::Query { id } => {
                    let result = executor.execute(Command::QueryCar { id: id.clone() });
                    match model.get(&id) {
                        Some(car) => prop_assert_eq!(&expect_car(result.unwrap()), car),
                        None => prop_assert_eq!(
                            result.unwrap_err().chaincode_kind(),
                            Some(ErrorKind::RecordNotFound)
                        ),
                    }
                }
                Op::Exists { id } => {
                    let result = executor.execute(Command::CarExists { id: id.clone() }).unwrap();
                    prop_assert_eq!(result, Output::Bool(model.contains_key(&id)));
                }
                Op::Seed => {
                    let mut expected_created = 0;
                    for sample in carshowroom::SAMPLE_CARS.iter() {
                        if !model.contains_key(sample.id) {
                            model.insert(sample.id.to_string(), sample.to_car());
                            expected_created += 1;
                        }
                    }
                    prop_assert_eq!(
                        executor.execute(Command::InitLedger).unwrap(),
                        Output::initialized(expected_created)
                    );
                }
            }
        }

        let all = expect_cars(executor.execute(Command::QueryAllCars).unwrap());
        let expected: Vec<Car> = model.into_values().collect();
        prop_assert_eq!(all, expected);
        prop_assert_eq!(executor.ledger().leaked_iterators(), 0);
        prop_assert_eq!(executor.ledger().open_iterators(), 0);
    }

    #[test]
    fn stored_json_round_trips(
        id in "[A-Z0-9]{1,8}",
        make in "\\PC{0,12}",
        model in "\\PC{0,12}",
        year in any::<i32>(),
    ) {
        let executor = executor();
        let car = Car::new(id.as_str(), make.as_str(), model.as_str(), "Blue", year, "Owner");
        executor.execute(Command::CreateCar {
            id: id.clone(),
            make,
            model,
            color: "Blue".into(),
            year,
            owner: "Owner".into(),
        }).unwrap();

        let raw = executor.ledger().get_committed(&id).unwrap();
        prop_assert_eq!(Car::from_json(&id, &raw).unwrap(), car);
    }
}

//! Transaction handlers.
//!
//! Each handler unpacks positional string arguments, calls one contract
//! operation and wraps the result in an [`Output`]. Argument parsing happens
//! before the stub is touched.

use showroom_contract::CarShowroomContract;
use showroom_core::{Car, Error, LedgerStub, Result};

use crate::Output;

fn arity(transaction: &str, expected: usize, args: &[String]) -> Error {
    Error::invalid_argument(format!(
        "{} expects {} argument(s), got {}",
        transaction,
        expected,
        args.len()
    ))
}

/// Parse a model year
pub(crate) fn parse_year(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .map_err(|_| Error::invalid_argument(format!("year must be an integer, got '{}'", raw)))
}

pub(crate) fn init_ledger(
    contract: &CarShowroomContract,
    stub: &mut dyn LedgerStub,
    args: &[String],
) -> Result<Output> {
    if !args.is_empty() {
        return Err(arity("initLedger", 0, args));
    }
    let created = contract.init_ledger(stub)?;
    Ok(Output::initialized(created))
}

pub(crate) fn create_car(
    contract: &CarShowroomContract,
    stub: &mut dyn LedgerStub,
    args: &[String],
) -> Result<Output> {
    let [id, make, model, color, year, owner] = args else {
        return Err(arity("createCar", 6, args));
    };
    let car = Car::new(id.as_str(), make.as_str(), model.as_str(), color.as_str(), parse_year(year)?, owner.as_str());
    contract.create_car(stub, car).map(Output::Car)
}

pub(crate) fn car_exists(
    contract: &CarShowroomContract,
    stub: &mut dyn LedgerStub,
    args: &[String],
) -> Result<Output> {
    let [id] = args else {
        return Err(arity("carExists", 1, args));
    };
    contract.car_exists(stub, id).map(Output::Bool)
}

pub(crate) fn query_car(
    contract: &CarShowroomContract,
    stub: &mut dyn LedgerStub,
    args: &[String],
) -> Result<Output> {
    let [id] = args else {
        return Err(arity("queryCar", 1, args));
    };
    contract.query_car(stub, id).map(Output::Car)
}

pub(crate) fn transfer_car_ownership(
    contract: &CarShowroomContract,
    stub: &mut dyn LedgerStub,
    args: &[String],
) -> Result<Output> {
    let [id, new_owner] = args else {
        return Err(arity("transferCarOwnership", 2, args));
    };
    contract
        .transfer_car_ownership(stub, id, new_owner)
        .map(Output::Car)
}

pub(crate) fn query_all_cars(
    contract: &CarShowroomContract,
    stub: &mut dyn LedgerStub,
    args: &[String],
) -> Result<Output> {
    if !args.is_empty() {
        return Err(arity("queryAllCars", 0, args));
    }
    contract.query_all_cars(stub).map(Output::Cars)
}

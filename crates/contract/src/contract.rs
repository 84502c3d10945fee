//! CarShowroomContract: the contract operations
//!
//! ## Design
//!
//! The contract is a stateless facade over the host's ledger stub. It holds
//! nothing between calls, performs no locking and never retries: conflicts
//! between concurrent invocations are detected by the host at commit, and
//! every failure is returned to the host unchanged.
//!
//! ## Key Design
//!
//! - Key: the car id, verbatim
//! - Value: the car as JSON (see [`Car`])
//! - An absent or empty value means "no car"
//!
//! ## State Machine (per id)
//!
//! ```text
//! NonExistent --create_car--> Existing --transfer_car_ownership--> Existing
//! ```
//!
//! There is no way back to `NonExistent`.

use showroom_core::{Car, Error, LedgerStub, RangeScan, Result};
use tracing::{debug, info, warn};

use crate::metadata::ContractInfo;
use crate::samples::SAMPLE_CARS;

/// The car showroom contract
///
/// # Example
///
/// ```ignore
/// let contract = CarShowroomContract::new();
/// let ledger = Ledger::new();
///
/// ledger.submit(|txn| contract.create_car(txn, Car::new("CAR001", "Toyota", "Corolla", "Blue", 2020, "John")))?;
/// let car = ledger.evaluate(|txn| contract.query_car(txn, "CAR001"))?;
/// assert_eq!(car.owner(), "John");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CarShowroomContract;

impl CarShowroomContract {
    /// Create the contract
    pub fn new() -> Self {
        Self
    }

    /// Descriptive information
    pub fn info(&self) -> ContractInfo {
        ContractInfo::carshowroom()
    }

    /// Create every sample car that is not already present
    ///
    /// Idempotent. Returns how many cars this call created.
    pub fn init_ledger<S>(&self, stub: &mut S) -> Result<usize>
    where
        S: LedgerStub + ?Sized,
    {
        let mut created = 0;
        for sample in &SAMPLE_CARS {
            if !self.car_exists(stub, sample.id)? {
                self.create_car(stub, sample.to_car())?;
                created += 1;
            }
        }
        info!(target: "showroom::contract", tx_id = stub.tx_id(), created, "Ledger initialized");
        Ok(created)
    }

    /// Store a new car under its id
    ///
    /// Fails with `AlreadyExists` if the id is taken; nothing is written in
    /// that case.
    pub fn create_car<S>(&self, stub: &mut S, car: Car) -> Result<Car>
    where
        S: LedgerStub + ?Sized,
    {
        if self.car_exists(stub, car.id())? {
            let err = Error::already_exists(car.id());
            warn!(target: "showroom::contract", tx_id = stub.tx_id(), id = car.id(), "{}", err);
            return Err(err);
        }

        stub.put_state(car.id(), &car.to_json()?)?;
        debug!(target: "showroom::contract", tx_id = stub.tx_id(), id = car.id(), "Car created");
        Ok(car)
    }

    /// True iff a non-empty value is stored at `id`
    pub fn car_exists<S>(&self, stub: &mut S, id: &str) -> Result<bool>
    where
        S: LedgerStub + ?Sized,
    {
        Ok(stub.get_state(id)?.is_some_and(|v| !v.is_empty()))
    }

    /// Fetch the car stored at `id`
    pub fn query_car<S>(&self, stub: &mut S, id: &str) -> Result<Car>
    where
        S: LedgerStub + ?Sized,
    {
        let json = self.read_existing(stub, id)?;
        Car::from_json(id, &json)
    }

    /// Replace the owner of the car at `id`
    ///
    /// Every other field is preserved. Returns the updated car.
    pub fn transfer_car_ownership<S>(&self, stub: &mut S, id: &str, new_owner: &str) -> Result<Car>
    where
        S: LedgerStub + ?Sized,
    {
        let json = self.read_existing(stub, id)?;
        let mut car = Car::from_json(id, &json)?;
        let previous_owner = car.owner().to_string();
        car.set_owner(new_owner);

        stub.put_state(id, &car.to_json()?)?;
        debug!(
            target: "showroom::contract",
            tx_id = stub.tx_id(),
            id,
            from = %previous_owner,
            to = new_owner,
            "Car ownership transferred"
        );
        Ok(car)
    }

    /// Every car on the ledger, in the host's iteration order
    ///
    /// A value that does not decode fails the whole call. The range cursor
    /// is closed on every path.
    pub fn query_all_cars<S>(&self, stub: &mut S) -> Result<Vec<Car>>
    where
        S: LedgerStub + ?Sized,
    {
        let tx_id = stub.tx_id().to_string();
        let mut scan = RangeScan::open(stub, "", "")?;
        let mut cars = Vec::new();

        for entry in scan.by_ref() {
            let entry = entry?;
            if entry.value.is_empty() {
                continue;
            }
            match Car::from_json(&entry.key, &entry.value) {
                Ok(car) => cars.push(car),
                Err(err) => {
                    warn!(target: "showroom::contract", tx_id = %tx_id, key = %entry.key, "{}", err);
                    return Err(err);
                }
            }
        }
        scan.close()?;

        debug!(target: "showroom::contract", tx_id = %tx_id, count = cars.len(), "Queried all cars");
        Ok(cars)
    }

    /// Stored value at `id`, or `NotFound`
    fn read_existing<S>(&self, stub: &mut S, id: &str) -> Result<String>
    where
        S: LedgerStub + ?Sized,
    {
        match stub.get_state(id)? {
            Some(json) if !json.is_empty() => Ok(json),
            _ => {
                let err = Error::not_found(id);
                warn!(target: "showroom::contract", tx_id = stub.tx_id(), id, "{}", err);
                Err(err)
            }
        }
    }
}

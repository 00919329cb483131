use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global authority, fixed at deployment.
    Owner,
    /// Last assigned record id (absent means no records).
    RecordCounter,
    /// record_id -> VaccineRecord
    Record(u64),
    /// provider address -> HealthcareProvider
    Provider(Address),
    PatientRecords(Address), // List of record IDs (u64), creation order
    BatchUsed(String),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidInput = 1,
    Unauthorized = 2,
    AlreadyRegistered = 3,
    NotFound = 4,
    NotVerified = 5,
}

/// A single administered dose. Only `is_verified` changes after creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaccineRecord {
    pub record_id: u64,
    pub patient_address: Address,
    pub patient_name: String,
    pub vaccine_name: String,
    pub manufacturer: String,
    pub batch_number: String,
    pub location: String,
    pub vaccination_date: u64,
    pub healthcare_provider: Address,
    pub is_verified: bool,
    pub timestamp: u64,
}

/// Registration and approval state of a provider.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthcareProvider {
    pub provider_address: Address,
    pub provider_name: String,
    pub license_number: String,
    pub is_approved: bool,
    pub registration_date: u64,
}

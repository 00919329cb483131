use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{DataKey, HealthcareProvider, VaccineRecord};

/// Entries whose remaining TTL drops below this many ledgers get bumped
/// whenever they are read or written. An entry left untouched for longer
/// than `TTL_EXTEND_TO` ledgers is archived and must be restored before use.
pub const TTL_THRESHOLD: u32 = 518_400;
/// Target TTL (in ledgers) after a bump, roughly 60 days.
pub const TTL_EXTEND_TO: u32 = 1_036_800;

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// -----------------------------------------------------------------------
// Owner
// -----------------------------------------------------------------------

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn read_owner(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Owner)
}

// -----------------------------------------------------------------------
// Counter
// -----------------------------------------------------------------------

pub fn record_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::RecordCounter)
        .unwrap_or(0)
}

pub fn next_record_id(env: &Env) -> u64 {
    let next = record_count(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::RecordCounter, &next);
    bump_instance(env);
    next
}

// -----------------------------------------------------------------------
// Providers
// -----------------------------------------------------------------------

pub fn save_provider(env: &Env, provider: &HealthcareProvider) {
    let key = DataKey::Provider(provider.provider_address.clone());
    env.storage().persistent().set(&key, provider);
    bump_persistent(env, &key);
}

pub fn load_provider(env: &Env, provider: &Address) -> Option<HealthcareProvider> {
    let key = DataKey::Provider(provider.clone());
    let profile = env.storage().persistent().get(&key);
    if profile.is_some() {
        bump_persistent(env, &key);
    }
    profile
}

pub fn is_approved(env: &Env, provider: &Address) -> bool {
    load_provider(env, provider)
        .map(|p| p.is_approved)
        .unwrap_or(false)
}

pub fn has_provider(env: &Env, provider: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Provider(provider.clone()))
}

// -----------------------------------------------------------------------
// Records
// -----------------------------------------------------------------------

pub fn save_record(env: &Env, record: &VaccineRecord) {
    let key = DataKey::Record(record.record_id);
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Loads a record, treating ids outside `1..=counter` as absent.
pub fn load_record(env: &Env, record_id: u64) -> Option<VaccineRecord> {
    if record_id == 0 || record_id > record_count(env) {
        return None;
    }
    let key = DataKey::Record(record_id);
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

pub fn add_patient_record(env: &Env, patient: &Address, record_id: u64) {
    let key = DataKey::PatientRecords(patient.clone());
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    ids.push_back(record_id);
    env.storage().persistent().set(&key, &ids);
    bump_persistent(env, &key);
}

pub fn load_patient_records(env: &Env, patient: &Address) -> Vec<u64> {
    let key = DataKey::PatientRecords(patient.clone());
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

// -----------------------------------------------------------------------
// Batch numbers
// -----------------------------------------------------------------------

pub fn mark_batch_used(env: &Env, batch_number: &String) {
    let key = DataKey::BatchUsed(batch_number.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn is_batch_used(env: &Env, batch_number: &String) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::BatchUsed(batch_number.clone()))
        .unwrap_or(false)
}

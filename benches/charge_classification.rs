//! Benchmark suite for mock charge classification
//!
//! Measures the fixture-pool classification path of the mock backend using
//! the divan benchmarking framework: a successful charge (full pool walk plus
//! detail checks) and an early declined rejection.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use pay_gateway::gateway::{ConnectionParams, OperationOptions, PaySession, PaySystem};
use pay_gateway::mock::{FixturePools, MockGateway, PoolName};
use pay_gateway::types::{Account, AccountData, ActualAccountData, Amount};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn card(number: &str) -> AccountData {
    AccountData {
        account_number: number.to_string(),
        card_expiration_year: Some(2027),
        card_expiration_month: Some(4),
        card_verification_code: Some("123".to_string()),
        ..AccountData::default()
    }
}

fn bench_gateway() -> MockGateway {
    let mut pools = FixturePools::new();
    for i in 0..50 {
        pools.push(PoolName::CreditCardDeclined, card(&format!("400000{:010}", i)));
        pools.push(PoolName::CreditCardLuhnError, card(&format!("424242{:010}", i)));
        pools.push(PoolName::CreditCardCorrect, card(&format!("411111{:010}", i)));
    }
    pools.push(PoolName::CreditCardCorrect, card("4242424242424242"));

    let vault = vec![
        ActualAccountData::new(Account::new("customer", "125", "good"), card("4242424242424242")),
        ActualAccountData::new(
            Account::new("customer", "125", "declined"),
            card("4000000000000000"),
        ),
    ];
    MockGateway::with_vault(pools, vault)
}

fn open_session(gateway: &MockGateway) -> PaySession {
    gateway
        .start_session(&ConnectionParams::default(), None)
        .expect("mock session should start")
}

/// Benchmark a successful charge: full pool precedence walk plus detail checks
#[divan::bench]
fn charge_success(bencher: divan::Bencher) {
    let gateway = bench_gateway();
    let session = open_session(&gateway);
    let from = Account::new("customer", "125", "good");
    let to = Account::new("merchant", "1", "1");

    bencher.bench_local(|| {
        gateway
            .charge(
                &session,
                &from,
                &to,
                Amount::new("usd", Decimal::ONE),
                true,
                &OperationOptions::default(),
            )
            .expect("charge should succeed")
    });
}

/// Benchmark a declined charge: rejected by the first consulted pool
#[divan::bench]
fn charge_declined(bencher: divan::Bencher) {
    let gateway = bench_gateway();
    let session = open_session(&gateway);
    let from = Account::new("customer", "125", "declined");
    let to = Account::new("merchant", "1", "1");

    bencher.bench_local(|| {
        gateway
            .charge(
                &session,
                &from,
                &to,
                Amount::new("usd", Decimal::ONE),
                true,
                &OperationOptions::default(),
            )
            .expect_err("charge should be declined")
    });
}

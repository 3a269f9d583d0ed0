use async_trait::async_trait;
use eip1193::{RequestArguments, WalletCapability, ETH_REQUEST_ACCOUNTS};
use std::time::Duration;
use superswap_core::{Error, SwapIntent, SwapPhase, SwapReceipt};
use tracing::{debug, error, info, warn};

/// Waits out the (simulated) settlement of a swap.
#[async_trait(?Send)]
pub trait Settlement {
    async fn settle(&self, delay: Duration) -> Result<(), Error>;
}

/// Settles by sleeping on a browser timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSettlement;

#[async_trait(?Send)]
impl Settlement for TimerSettlement {
    async fn settle(&self, delay: Duration) -> Result<(), Error> {
        gloo_timers::future::sleep(delay).await;
        Ok(())
    }
}

/// Runs one swap attempt against an explicitly supplied wallet.
///
/// `wallet` is `None` when no provider was detected; the attempt then fails
/// before anything else happens.
pub struct SwapOrchestrator<'a> {
    wallet: Option<&'a dyn WalletCapability>,
    settlement: &'a dyn Settlement,
    delay: Duration,
}

impl<'a> SwapOrchestrator<'a> {
    pub fn new(
        wallet: Option<&'a dyn WalletCapability>,
        settlement: &'a dyn Settlement,
        delay: Duration,
    ) -> Self {
        Self {
            wallet,
            settlement,
            delay,
        }
    }

    /// Drives the attempt to completion, calling `report` with every phase it
    /// enters. Returns the final phase, which is always `Succeeded` or `Failed`.
    ///
    /// `intent` reads the form as it is right now. The receipt is taken from
    /// it once the swap has settled, so edits made while waiting show up.
    pub async fn execute(
        &self,
        intent: impl Fn() -> SwapIntent,
        mut report: impl FnMut(&SwapPhase),
    ) -> SwapPhase {
        let phase = match self.run(&intent, &mut report).await {
            Ok(receipt) => {
                info!("{receipt}");
                SwapPhase::Succeeded(receipt)
            }
            Err(e) => {
                error!("Swap failed: {e}");
                SwapPhase::Failed(e)
            }
        };
        report(&phase);
        phase
    }

    async fn run(
        &self,
        intent: &impl Fn() -> SwapIntent,
        report: &mut impl FnMut(&SwapPhase),
    ) -> Result<SwapReceipt, Error> {
        report(&SwapPhase::CheckingProvider);
        let wallet = self.wallet.ok_or(Error::ProviderNotDetected)?;

        debug!("Sending {}", intent().source_amount());

        report(&SwapPhase::RequestingAccounts);
        let accounts = wallet
            .request(RequestArguments::new(ETH_REQUEST_ACCOUNTS))
            .await
            .inspect_err(|e| {
                if e.is_user_rejection() {
                    warn!("account request rejected by the user");
                }
            })?;
        debug!("{ETH_REQUEST_ACCOUNTS} -> {accounts}");

        report(&SwapPhase::Waiting);
        self.settlement.settle(self.delay).await?;

        Ok(intent().receipt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeWallet {
        methods: RefCell<Vec<String>>,
        reject: Option<eip1193::Error>,
    }

    #[async_trait(?Send)]
    impl WalletCapability for FakeWallet {
        async fn request(
            &self,
            args: RequestArguments,
        ) -> Result<serde_json::Value, eip1193::Error> {
            self.methods.borrow_mut().push(args.method);
            match &self.reject {
                Some(error) => Err(error.clone()),
                None => Ok(serde_json::json!(["0x0000000000000000000000000000000000000001"])),
            }
        }
    }

    #[derive(Default)]
    struct FakeSettlement {
        waited: Cell<Option<Duration>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Settlement for FakeSettlement {
        async fn settle(&self, delay: Duration) -> Result<(), Error> {
            self.waited.set(Some(delay));
            match self.fail {
                true => Err(Error::settlement("timer dropped")),
                false => Ok(()),
            }
        }
    }

    const DELAY: Duration = Duration::from_secs(5);

    fn run(
        wallet: Option<&dyn WalletCapability>,
        settlement: &dyn Settlement,
        intent: &SwapIntent,
    ) -> (SwapPhase, Vec<SwapPhase>) {
        let mut phases = Vec::new();
        let orchestrator = SwapOrchestrator::new(wallet, settlement, DELAY);
        let last = block_on(orchestrator.execute(
            || intent.clone(),
            |phase| phases.push(phase.clone()),
        ));
        (last, phases)
    }

    #[test]
    fn missing_wallet_fails_before_waiting() {
        let settlement = FakeSettlement::default();
        let (last, phases) = run(None, &settlement, &SwapIntent::default());

        assert_eq!(last, SwapPhase::Failed(Error::ProviderNotDetected));
        assert_eq!(
            phases,
            vec![
                SwapPhase::CheckingProvider,
                SwapPhase::Failed(Error::ProviderNotDetected)
            ]
        );
        assert_eq!(settlement.waited.get(), None);
        assert_eq!(
            last.status(),
            superswap_core::OperationStatus::Failed(
                "Ethereum provider not detected. Please install MetaMask or another web3 wallet."
                    .to_string()
            )
        );
    }

    #[test]
    fn happy_path_walks_every_phase_once() {
        let wallet = FakeWallet::default();
        let settlement = FakeSettlement::default();
        let intent = SwapIntent::default();

        let (last, phases) = run(Some(&wallet), &settlement, &intent);

        let receipt = intent.receipt();
        assert_eq!(last, SwapPhase::Succeeded(receipt.clone()));
        assert_eq!(
            phases,
            vec![
                SwapPhase::CheckingProvider,
                SwapPhase::RequestingAccounts,
                SwapPhase::Waiting,
                SwapPhase::Succeeded(receipt),
            ]
        );
        assert_eq!(
            phases.iter().filter(|phase| phase.receipt().is_some()).count(),
            1
        );
        assert_eq!(*wallet.methods.borrow(), vec![ETH_REQUEST_ACCOUNTS.to_string()]);
        assert_eq!(settlement.waited.get(), Some(DELAY));
    }

    /// Stands in for the user editing the form while the swap settles.
    struct EditingSettlement<'a> {
        form: &'a RefCell<SwapIntent>,
        amount: &'static str,
    }

    #[async_trait(?Send)]
    impl Settlement for EditingSettlement<'_> {
        async fn settle(&self, _delay: Duration) -> Result<(), Error> {
            self.form.borrow_mut().set_source_amount(self.amount);
            Ok(())
        }
    }

    #[test]
    fn receipt_reflects_the_form_when_the_swap_settles() {
        let wallet = FakeWallet::default();
        let form = RefCell::new(SwapIntent::default());
        let settlement = EditingSettlement {
            form: &form,
            amount: "7.5",
        };

        let orchestrator = SwapOrchestrator::new(Some(&wallet), &settlement, DELAY);
        let last = block_on(orchestrator.execute(|| form.borrow().clone(), |_| ()));

        let receipt = last.receipt().cloned().expect("swap should succeed");
        assert_eq!(receipt.source_amount, "7.5");
        assert_eq!(receipt.destination_amount, "7.13");
        assert_eq!(
            receipt.to_string(),
            "Successfully swapped 7.5 ETH for 7.13 OP"
        );
    }

    #[test]
    fn wallet_rejection_is_an_operational_failure() {
        let wallet = FakeWallet {
            reject: Some(eip1193::Error::Rpc {
                code: 4001,
                message: "User rejected the request.".to_string(),
            }),
            ..Default::default()
        };
        let settlement = FakeSettlement::default();

        let (last, phases) = run(Some(&wallet), &settlement, &SwapIntent::default());

        assert_eq!(
            last,
            SwapPhase::Failed(Error::Wallet("User rejected the request.".to_string()))
        );
        assert!(!phases.contains(&SwapPhase::Waiting));
        assert_eq!(settlement.waited.get(), None);
    }

    #[test]
    fn settlement_errors_are_reported() {
        let wallet = FakeWallet::default();
        let settlement = FakeSettlement {
            fail: true,
            ..Default::default()
        };

        let (last, phases) = run(Some(&wallet), &settlement, &SwapIntent::default());

        assert_eq!(last, SwapPhase::Failed(Error::settlement("timer dropped")));
        assert!(phases.contains(&SwapPhase::Waiting));
    }

    #[test]
    fn failures_and_dismissal_leave_the_form_alone() {
        let mut intent = SwapIntent::default();
        intent.set_source_amount("250");
        let before = intent.clone();

        let settlement = FakeSettlement::default();
        let (failed, _) = run(None, &settlement, &intent);
        assert!(failed.error().is_some());
        assert_eq!(intent, before);

        let wallet = FakeWallet::default();
        let (succeeded, _) = run(Some(&wallet), &settlement, &intent);
        assert_eq!(succeeded.dismiss(), SwapPhase::Idle);
        assert_eq!(intent.source_amount(), "250");
        assert_eq!(intent.destination_amount(), "237.50");
    }

    #[test]
    fn retry_after_failure_can_succeed() {
        let settlement = FakeSettlement::default();
        let intent = SwapIntent::default();

        let (failed, _) = run(None, &settlement, &intent);
        assert!(failed.begin().is_some());

        let wallet = FakeWallet::default();
        let (last, _) = run(Some(&wallet), &settlement, &intent);
        assert!(matches!(last, SwapPhase::Succeeded(_)));
    }
}

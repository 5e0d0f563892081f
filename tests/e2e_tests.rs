//! End-to-end integration tests
//!
//! These tests drive the wallet the way the binary does: every step opens
//! the JSON store file afresh, executes one command and drops the wallet.
//! This validates that session, balance and history survive between runs
//! and that a damaged store file never blocks the wallet.

#[cfg(test)]
mod tests {
    use alke_wallet::cli::{execute, CliArgs};
    use alke_wallet::core::ledger::{KEY_BALANCE, KEY_TRANSACTIONS};
    use alke_wallet::core::Wallet;
    use alke_wallet::storage::{FileStore, KeyValueStore};
    use alke_wallet::types::{TransactionFilter, WalletError};
    use clap::Parser;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Run one command line against the store at `path`
    ///
    /// Mirrors `main`: parse, open the store, execute, capture stdout.
    fn run(path: &Path, argv: &[&str]) -> Result<String, WalletError> {
        let mut full = vec!["alke-wallet", "--store", path.to_str().unwrap()];
        full.extend_from_slice(argv);
        let args = CliArgs::try_parse_from(full).unwrap_or_else(|e| panic!("bad argv: {}", e));

        let store = FileStore::open(&args.store)?;
        let mut wallet = Wallet::new(store);
        let mut output = Vec::new();
        execute(&args.command, &mut wallet, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("wallet.json")
    }

    fn login(path: &Path) {
        run(path, &["login", "--email", "demo@alkewallet.com", "--password", "1234"])
            .expect("demo login should succeed");
    }

    fn balance(path: &Path) -> Decimal {
        Wallet::new(FileStore::open(path).unwrap()).balance()
    }

    fn titles(path: &Path, filter: TransactionFilter) -> Vec<String> {
        Wallet::new(FileStore::open(path).unwrap())
            .list_transactions(filter)
            .iter()
            .map(|tx| tx.title.clone())
            .collect()
    }

    #[test]
    fn test_deposit_send_overdraw_scenario() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);
        assert_eq!(balance(&path), Decimal::ZERO);

        run(&path, &["deposit", "100"]).unwrap();
        assert_eq!(balance(&path), Decimal::new(100, 0));
        assert_eq!(titles(&path, TransactionFilter::All), vec!["Deposit"]);

        run(&path, &["send", "Juan Perez", "40"]).unwrap();
        assert_eq!(balance(&path), Decimal::new(60, 0));
        assert_eq!(
            titles(&path, TransactionFilter::All),
            vec!["Send to Juan Perez", "Deposit"]
        );

        let result = run(&path, &["send", "Juan Perez", "1000"]);
        assert!(matches!(result, Err(WalletError::InsufficientFunds { .. })));
        assert_eq!(balance(&path), Decimal::new(60, 0));
        assert_eq!(titles(&path, TransactionFilter::All).len(), 2);
    }

    #[test]
    fn test_commands_require_login() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        assert_eq!(
            run(&path, &["deposit", "10"]),
            Err(WalletError::NotAuthenticated)
        );
        // Nothing was written
        assert!(!path.exists());
    }

    #[test]
    fn test_logout_keeps_wallet_and_relogin_restores_access() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);
        run(&path, &["deposit", "25.5"]).unwrap();

        run(&path, &["logout"]).unwrap();
        assert_eq!(run(&path, &["status"]), Err(WalletError::NotAuthenticated));

        login(&path);
        let status = run(&path, &["status", "--recent", "1"]).unwrap();
        assert!(status.contains("Balance: 25.50"));
        assert!(status.contains("Deposit"));
    }

    #[rstest]
    #[case::empty_recipient(&["send", "", "10"], "Recipient is required")]
    #[case::invalid_amount(&["send", "Ana", "abc"], "Invalid amount")]
    #[case::invalid_recipient(&["send", "Ana123", "10"], "Invalid recipient 'Ana123'")]
    #[case::insufficient(&["send", "Ana", "51"], "Insufficient balance: available 50, requested 51")]
    #[case::negative_deposit(&["deposit", "-1"], "Invalid amount '-1'")]
    fn test_rejected_operations_leave_state_unchanged(
        #[case] argv: &[&str],
        #[case] expected_message: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);
        run(&path, &["deposit", "50"]).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let error = run(&path, argv).unwrap_err();

        assert!(error.is_validation());
        assert!(
            error.to_string().contains(expected_message),
            "unexpected message: {}",
            error
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_history_filter_and_csv_export() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);
        run(&path, &["deposit", "100", "--note", "salary"]).unwrap();
        run(&path, &["send", "Ana María", "30", "--note", "rent"]).unwrap();
        run(&path, &["deposit", "5"]).unwrap();

        assert_eq!(
            titles(&path, TransactionFilter::Deposit),
            vec!["Deposit", "Deposit"]
        );
        assert_eq!(
            titles(&path, TransactionFilter::Send),
            vec!["Send to Ana María"]
        );

        let csv = run(&path, &["history", "--csv"]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id,type,recipient,title,amount,note,date");
        assert!(lines[1].contains(",deposit,,Deposit,5,,"));
        assert!(lines[2].contains(",send,Ana María,Send to Ana María,30,rent,"));
        assert!(lines[3].contains(",deposit,,Deposit,100,salary,"));
    }

    #[test]
    fn test_clear_history_keeps_balance() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);
        run(&path, &["deposit", "80"]).unwrap();
        run(&path, &["send", "Juan", "20"]).unwrap();

        run(&path, &["clear-history"]).unwrap();

        assert!(titles(&path, TransactionFilter::All).is_empty());
        assert_eq!(balance(&path), Decimal::new(60, 0));
        assert_eq!(run(&path, &["history"]).unwrap(), "  No transactions\n");
    }

    #[test]
    fn test_corrupted_history_reads_empty_and_recovers() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);
        run(&path, &["deposit", "10"]).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.set(KEY_TRANSACTIONS, "[{\"id\": oops").unwrap();
        drop(store);

        assert_eq!(run(&path, &["history"]).unwrap(), "  No transactions\n");
        assert_eq!(balance(&path), Decimal::new(10, 0));

        run(&path, &["deposit", "1"]).unwrap();
        assert_eq!(titles(&path, TransactionFilter::All), vec!["Deposit"]);
        assert_eq!(balance(&path), Decimal::new(11, 0));
    }

    #[test]
    fn test_non_numeric_balance_reads_zero() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);

        let mut store = FileStore::open(&path).unwrap();
        store.set(KEY_BALANCE, "lots").unwrap();
        drop(store);

        assert_eq!(balance(&path), Decimal::ZERO);
        let result = run(&path, &["send", "Ana", "1"]);
        assert!(matches!(result, Err(WalletError::InsufficientFunds { .. })));
    }

    #[test]
    fn test_damaged_store_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "this is not json").unwrap();

        assert_eq!(run(&path, &["status"]), Err(WalletError::NotAuthenticated));
        assert_eq!(
            fs::read_to_string(dir.path().join("wallet.json.bak")).unwrap(),
            "this is not json"
        );
        login(&path);
        assert_eq!(balance(&path), Decimal::ZERO);
    }

    #[test]
    fn test_history_limit() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        login(&path);
        for amount in ["1", "2", "3"] {
            run(&path, &["deposit", amount]).unwrap();
        }

        let out = run(&path, &["history", "--limit", "2"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("3.00"));
        assert!(lines[1].contains("2.00"));
    }
}

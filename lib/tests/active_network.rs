use heliumlib::chainparams::{active_network, select, NetworkId};
use heliumlib::{active_params, select_params, ChainError};

// The active network is process-wide and can be set once, so the whole
// lifecycle runs in one test.
#[test]
fn network_selection_lifecycle() {
    assert_eq!(active_network(), None);
    assert_eq!(active_params(), Err(ChainError::NoActiveNetwork));

    // a bad name never selects anything
    assert_eq!(
        select_params("mainnet"),
        Err(ChainError::UnknownNetwork("mainnet".to_string()))
    );
    assert_eq!(active_network(), None);

    let regtest = select_params("regtest").unwrap();
    assert_eq!(regtest.network, NetworkId::RegTest);
    assert_eq!(active_network(), Some(NetworkId::RegTest));

    let active = active_params().unwrap();
    assert!(std::ptr::eq(active, regtest));
    assert_eq!(active.genesis_hash(), active.genesis.hash());

    assert_eq!(
        select_params("test"),
        Err(ChainError::NetworkAlreadySelected {
            active: NetworkId::RegTest,
            requested: NetworkId::Test,
        })
    );
    assert_eq!(active_params().unwrap().network, NetworkId::RegTest);

    assert!(std::ptr::eq(select(NetworkId::RegTest).unwrap(), regtest));
}

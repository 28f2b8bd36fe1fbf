//! End-to-end page behavior against a virtual clock.

use std::cell::Cell;
use std::rc::Rc;

use linkpage::config::{PROOF_VIEWER_BREAKPOINT, REVEAL_DELAY_MS, site_config};
use linkpage::core::{Presentation, ProofViewer, RevealScheduler};
use linkpage::models::{LinkActivation, ProofId};
use linkpage::utils::timer::mock::ManualTimer;

fn mount_page(timer: &ManualTimer) -> (RevealScheduler<ManualTimer>, Rc<Cell<bool>>) {
    let loading = Rc::new(Cell::new(true));
    let mut reveal = RevealScheduler::new(timer.clone(), REVEAL_DELAY_MS);
    let flag = loading.clone();
    reveal.mount(move || flag.set(false));
    (reveal, loading)
}

#[test]
fn test_visit_open_resize_close() {
    let timer = ManualTimer::new();
    let (_reveal, loading) = mount_page(&timer);

    // Placeholder only until the delay elapses
    assert!(loading.get());
    timer.advance(u64::from(REVEAL_DELAY_MS) - 1);
    assert!(loading.get());
    timer.advance(1);
    assert!(!loading.get());

    let site = site_config().unwrap();
    let names: Vec<&str> = site.links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Farid Fana",
            "Learn With Fana",
            "Farid Fana - فرید فنا",
            "Fanacryptonians",
            "Contact",
        ]
    );
    assert_eq!(site.links[0].activation(), LinkActivation::Blocked);
    assert_eq!(
        site.links[3].activation(),
        LinkActivation::Open {
            href: "https://t.me/Fanacryptonians"
        }
    );

    // Desktop: bitcoin opens in the dialog
    let bitcoin = ProofId::new("bitcoin");
    let mut viewer = ProofViewer::default();
    viewer.select(bitcoin.clone());

    let desktop = PROOF_VIEWER_BREAKPOINT.classify(Some(1280.0));
    let (presentation, id) = viewer.presentation(desktop).unwrap();
    assert_eq!(presentation, Presentation::Dialog);
    assert_eq!(
        site.proof(id).map(|p| p.src.as_str()),
        Some("/bitcoin-transfer-qr.jpg")
    );

    // Shrink to 400px: drawer, same proof
    let mobile = PROOF_VIEWER_BREAKPOINT.classify(Some(400.0));
    assert_eq!(
        viewer.presentation(mobile),
        Some((Presentation::Drawer, &bitcoin))
    );

    viewer.dismiss();
    assert!(viewer.selected().is_none());
    assert!(viewer.presentation(mobile).is_none());
}

#[test]
fn test_leaving_before_reveal() {
    let timer = ManualTimer::new();
    let (mut reveal, loading) = mount_page(&timer);

    timer.advance(500);
    reveal.unmount();
    timer.advance(u64::from(REVEAL_DELAY_MS) * 4);

    assert!(loading.get(), "state written after unmount");
    assert_eq!(timer.pending(), 0);
}

#[test]
fn test_switch_proofs_without_closing() {
    let mut viewer = ProofViewer::default();
    viewer.select(ProofId::new("bitcoin"));
    viewer.select(ProofId::new("hesabpay"));
    assert!(viewer.is_open());
    assert_eq!(viewer.selected(), Some(&ProofId::new("hesabpay")));
}

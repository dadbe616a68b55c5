/// Integration tests for the two namespace instantiations: entity-to-entity
/// and host-to-host addressing share the algorithm but no state — separate
/// tables, separate port spaces, separate default handlers.

use meridian_routing::{
    Endpoint, EntityAddress, EntityId, EntityRoutingTable, HostAddress, HostEndpoint, HostNodeId,
    HostRoutingTable, Port, PortId, PortRange, RealmId, Wildcard,
};
use meridian_test::{outbox_factory, passthrough_factory, recording_handler, Inbox, Outbox};

fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

#[test]
fn entity_and_host_tables_are_fully_independent() {
    init_logging();

    let entity_table = EntityRoutingTable::new(passthrough_factory());
    let host_table = HostRoutingTable::new(passthrough_factory());

    // numerically identical addresses in both namespaces
    let entity_address = EntityAddress::new(RealmId::new(1), EntityId::new(10));
    let host_address = HostAddress::new(RealmId::new(1), HostNodeId::new(10));

    let entity_port = entity_table.bind(&entity_address, PortId::new(2000)).unwrap();
    let entity_inbox: Inbox<EntityId> = Inbox::default();
    entity_port
        .borrow_mut()
        .receive(recording_handler(&entity_inbox));

    // the host table knows nothing about the entity binding
    let host_src = HostEndpoint::new(RealmId::new(1), HostNodeId::new(99), PortId::new(9));
    let host_dst = host_address.with_port(PortId::new(2000));
    assert!(!host_table.deliver(&host_src, &host_dst, b"misdirected"));
    assert!(entity_inbox.borrow().is_empty());

    // binding the same numeric port in the host namespace is no collision
    let host_port = host_table.bind(&host_address, PortId::new(2000));
    assert!(host_port.is_some());
}

#[test]
fn default_handlers_are_per_namespace() {
    init_logging();

    let entity_table = EntityRoutingTable::new(passthrough_factory());
    let host_table = HostRoutingTable::new(passthrough_factory());

    let entity_inbox: Inbox<EntityId> = Inbox::default();
    entity_table.register_default_handler(recording_handler(&entity_inbox));

    let host_src = HostEndpoint::new(RealmId::new(1), HostNodeId::new(99), PortId::new(9));
    let host_dst = HostEndpoint::new(RealmId::new(1), HostNodeId::new(10), PortId::new(2000));
    assert!(!host_table.deliver(&host_src, &host_dst, b"host-traffic"));
    assert!(entity_inbox.borrow().is_empty());
}

#[test]
fn port_spaces_are_per_namespace() {
    init_logging();

    // exhaust a tiny entity-side range; the host side stays unaffected
    let entity_table =
        EntityRoutingTable::with_range(PortRange::new(99, 101), passthrough_factory());
    let host_table = HostRoutingTable::with_range(PortRange::new(99, 101), passthrough_factory());

    let entity_address = EntityAddress::new(RealmId::new(1), EntityId::new(10));
    let host_address = HostAddress::new(RealmId::new(1), HostNodeId::new(10));

    let _a = entity_table.bind_any(&entity_address).unwrap();
    let _b = entity_table.bind_any(&entity_address).unwrap();
    assert!(entity_table.bind_any(&entity_address).is_none());

    assert!(host_table.bind_any(&host_address).is_some());
}

#[test]
fn outbound_send_and_inbound_deliver_round_trip() {
    init_logging();

    // two participants on one table; the "transport" is the outbox plus a
    // manual demux step feeding deliver, exactly the seam a real transport
    // layer occupies
    let outbox: Outbox<EntityId> = Outbox::default();
    let table = EntityRoutingTable::new(outbox_factory(outbox.clone()));

    let alice = EntityAddress::new(RealmId::new(1), EntityId::new(1));
    let bob = EntityAddress::new(RealmId::new(1), EntityId::new(2));

    let alice_port = table.bind(&alice, PortId::new(4000)).unwrap();
    let bob_port = table.bind(&bob, PortId::new(4000)).unwrap();

    let bob_inbox: Inbox<EntityId> = Inbox::default();
    bob_port.borrow_mut().receive(recording_handler(&bob_inbox));

    // alice transmits; the backend records what would hit the wire
    let bob_endpoint = bob.with_port(PortId::new(4000));
    assert!(alice_port.borrow_mut().send(&bob_endpoint, b"hi bob"));

    // demux the recorded frame back into the table
    let alice_endpoint = alice_port.borrow().endpoint();
    let frames = outbox.borrow().clone();
    assert_eq!(frames.len(), 1);
    let (to, payload) = &frames[0];
    log::info!("demuxing frame {} -> {}", alice_endpoint, to);
    assert!(table.deliver(&alice_endpoint, to, payload));

    let bob_inbox = bob_inbox.borrow();
    assert_eq!(bob_inbox.len(), 1);
    assert_eq!(bob_inbox[0].0, alice_endpoint);
    assert_eq!(bob_inbox[0].2, b"hi bob".to_vec());
}

#[test]
fn host_namespace_supports_the_same_dispatch_flow() {
    init_logging();

    let table = HostRoutingTable::new(passthrough_factory());
    let node = HostAddress::new(RealmId::new(7), HostNodeId::new(3));
    let port = table.bind_any(&node).unwrap();

    let inbox: Inbox<HostNodeId> = Inbox::default();
    port.borrow_mut().receive_from(
        Endpoint::new(RealmId::new(7), HostNodeId::any(), PortId::new(12)),
        recording_handler(&inbox),
    );

    let src = HostEndpoint::new(RealmId::new(7), HostNodeId::new(8), PortId::new(12));
    let dst = port.borrow().endpoint();
    assert!(table.deliver(&src, &dst, b"node-to-node"));
    assert_eq!(inbox.borrow().len(), 1);
}

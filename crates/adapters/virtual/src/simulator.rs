//! Simulation scheduler — mutates the fleet on a randomised timer and
//! broadcasts every device that changed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use mockhub_app::ports::EventPublisher;
use mockhub_app::registry::InMemoryDeviceRegistry;
use mockhub_domain::device::Device;
use mockhub_domain::error::MockHubError;
use mockhub_domain::event::DeviceChanged;
use mockhub_domain::id::DeviceId;

use crate::devices::apply_rules;
use crate::dice::Dice;

/// Drives the device fleet: one tick per randomised delay.
pub struct Simulator<P> {
    registry: Arc<InMemoryDeviceRegistry>,
    publisher: P,
}

impl<P> Simulator<P>
where
    P: EventPublisher + Send + Sync,
{
    pub fn new(registry: Arc<InMemoryDeviceRegistry>, publisher: P) -> Self {
        Self {
            registry,
            publisher,
        }
    }

    /// Run one simulation cycle.
    ///
    /// Applies the rules to every device in registry order, then publishes
    /// one [`DeviceChanged`] per device that reported a change, in the same
    /// order. Returns the ids that were published.
    ///
    /// # Errors
    ///
    /// Returns the publisher's error; devices after the failing one are not
    /// published for this tick.
    pub async fn tick(&self, dice: &mut impl Dice) -> Result<Vec<DeviceId>, MockHubError> {
        let changed: Vec<Device> = self.registry.mutate(|devices| {
            devices
                .iter_mut()
                .filter_map(|device| apply_rules(device, dice).then(|| device.clone()))
                .collect()
        });

        let mut published = Vec::with_capacity(changed.len());
        for device in changed {
            tracing::info!(device_id = %device.id(), "device changed");
            let id = device.id().clone();
            self.publisher.publish(DeviceChanged::new(device)).await?;
            published.push(id);
        }
        Ok(published)
    }

    /// Tick forever, waiting a random [`next_delay`] before each cycle,
    /// until `shutdown` changes or its sender is dropped.
    pub async fn run(self, mut dice: impl Dice, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(devices = self.registry.len(), "simulation started");
        loop {
            let delay = next_delay(&mut dice);
            tracing::debug!(next_tick_ms = delay.as_millis(), "next tick scheduled");

            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                _ = shutdown.changed() => break,
            }

            match self.tick(&mut dice).await {
                Ok(published) => tracing::debug!(changes = published.len(), "tick complete"),
                Err(err) => tracing::warn!(error = %err, "failed to publish device change"),
            }
        }
        tracing::info!("simulation stopped");
    }
}

/// Delay before the next tick: a whole number of tenths of a second
/// between 1.0 s and 9.9 s.
pub fn next_delay(dice: &mut impl Dice) -> Duration {
    Duration::from_millis(u64::from(dice.roll(10, 100)) * 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::fleet::seed_fleet;
    use mockhub_app::event_bus::InProcessEventBus;
    use mockhub_domain::device::{ConnectionState, DeviceKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn simulator() -> (
        Simulator<Arc<InProcessEventBus>>,
        Arc<InMemoryDeviceRegistry>,
        Arc<InProcessEventBus>,
    ) {
        let registry = Arc::new(InMemoryDeviceRegistry::new(seed_fleet().unwrap()));
        let bus = Arc::new(InProcessEventBus::new(64));
        let sim = Simulator::new(Arc::clone(&registry), Arc::clone(&bus));
        (sim, registry, bus)
    }

    fn device(registry: &InMemoryDeviceRegistry, id: &str) -> Device {
        registry.find(&DeviceId::new(id)).unwrap()
    }

    /// Draws for one tick over the seed fleet in which only `ts1` changes
    /// (it always does), warming by half a degree.
    fn quiet_tick() -> Vec<u32> {
        vec![
            0, 0, 0, 0, // b1: connection, toggle, brightness, colour
            0, 0, 0, 0, // b2
            0, 0, // o1: connection, toggle
            0, 0, // ts1: connection, coin
        ]
    }

    fn temperature(device: &Device) -> f64 {
        match device.kind() {
            DeviceKind::TemperatureSensor(s) => s.temperature,
            other => panic!("expected a temperature sensor, got {}", other.type_name()),
        }
    }

    #[tokio::test]
    async fn should_disconnect_b1_and_broadcast_it() {
        let (sim, registry, bus) = simulator();
        let mut rx = bus.subscribe();

        let mut draws = quiet_tick();
        draws[0] = 70; // b1 connection draw above 65
        draws.insert(1, 0); // first other state: disconnected
        let mut dice = ScriptedDice::new(draws);

        let published = sim.tick(&mut dice).await.unwrap();

        assert_eq!(published, [DeviceId::new("b1"), DeviceId::new("ts1")]);
        assert_eq!(
            device(&registry, "b1").connection_state(),
            ConnectionState::Disconnected
        );

        let first = rx.recv().await.unwrap();
        assert_eq!(first.device_id(), "b1");
        assert_eq!(
            first.device.connection_state(),
            ConnectionState::Disconnected
        );
        assert_eq!(rx.recv().await.unwrap().device_id(), "ts1");
        assert_eq!(dice.remaining(), 0);
    }

    #[tokio::test]
    async fn should_turn_on_o1_and_broadcast_it() {
        let (sim, registry, bus) = simulator();
        let mut rx = bus.subscribe();

        let mut draws = quiet_tick();
        draws[9] = 80; // o1 toggle draw above 70
        let mut dice = ScriptedDice::new(draws);

        let published = sim.tick(&mut dice).await.unwrap();
        assert_eq!(published, [DeviceId::new("o1"), DeviceId::new("ts1")]);

        let o1 = device(&registry, "o1");
        let DeviceKind::Outlet(outlet) = o1.kind() else {
            panic!("o1 should be an outlet");
        };
        assert!(outlet.is_turned_on());
        assert_eq!(outlet.power_consumption(), 200);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.device_id(), "o1");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["isTurnedOn"], true);
        assert_eq!(json["powerConsumption"], 200);
    }

    #[tokio::test]
    async fn should_cool_ts1_on_heads() {
        let (sim, registry, _bus) = simulator();

        let mut draws = quiet_tick();
        draws[11] = 1;
        let mut dice = ScriptedDice::new(draws);

        sim.tick(&mut dice).await.unwrap();
        assert!((temperature(&device(&registry, "ts1")) - 19.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_not_broadcast_color_only_change() {
        let (sim, registry, bus) = simulator();
        let mut rx = bus.subscribe();

        let mut draws = quiet_tick();
        draws[7] = 61; // b2 colour draw above 60
        draws.insert(8, 0x0012_3456);
        let mut dice = ScriptedDice::new(draws);

        let published = sim.tick(&mut dice).await.unwrap();
        assert_eq!(published, [DeviceId::new("ts1")]);

        let json = serde_json::to_value(device(&registry, "b2")).unwrap();
        assert_eq!(json["color"], "#123456");

        assert_eq!(rx.recv().await.unwrap().device_id(), "ts1");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn should_only_broadcast_sensor_on_quiet_tick() {
        let (sim, registry, bus) = simulator();
        let before = registry.snapshot();
        let mut rx = bus.subscribe();

        let published = sim
            .tick(&mut ScriptedDice::new(quiet_tick()))
            .await
            .unwrap();

        assert_eq!(published, [DeviceId::new("ts1")]);
        let after = registry.snapshot();
        assert_eq!(before[..3], after[..3]);
        assert_eq!(rx.recv().await.unwrap().device_id(), "ts1");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn should_hold_invariants_over_many_ticks() {
        let (sim, registry, _bus) = simulator();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            sim.tick(&mut rng).await.unwrap();

            let devices = registry.snapshot();
            assert_eq!(devices.len(), 4);
            for device in &devices {
                assert!(ConnectionState::ALL.contains(&device.connection_state()));
                match device.kind() {
                    DeviceKind::Bulb(bulb) => {
                        assert!((1..=100).contains(&bulb.brightness.value()));
                        assert_eq!(bulb.color.as_str().len(), 7);
                    }
                    DeviceKind::Outlet(outlet) => {
                        let expected = if outlet.is_turned_on() { 200 } else { 0 };
                        assert_eq!(outlet.power_consumption(), expected);
                    }
                    DeviceKind::TemperatureSensor(sensor) => {
                        assert!((17.5..=22.5).contains(&sensor.temperature));
                    }
                }
            }
        }
    }

    #[test]
    fn should_draw_delay_in_tenths_of_a_second() {
        let mut dice = ScriptedDice::new([10, 99, 42]);
        assert_eq!(next_delay(&mut dice), Duration::from_millis(1_000));
        assert_eq!(next_delay(&mut dice), Duration::from_millis(9_900));
        assert_eq!(next_delay(&mut dice), Duration::from_millis(4_200));
    }

    #[tokio::test(start_paused = true)]
    async fn should_wait_for_delay_before_first_tick() {
        let (sim, _registry, bus) = simulator();
        let mut rx = bus.subscribe();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut draws = vec![10]; // first delay: 1 s
        draws.extend(quiet_tick());
        draws.push(50); // second delay: 5 s
        let handle = tokio::spawn(sim.run(ScriptedDice::new(draws), shutdown_rx));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        let event = rx.recv().await.unwrap();
        assert_eq!(event.device_id(), "ts1");

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_when_shutdown_sender_dropped() {
        let (sim, _registry, _bus) = simulator();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(sim.run(StdRng::seed_from_u64(3), shutdown_rx));
        drop(shutdown_tx);

        handle.await.unwrap();
    }
}

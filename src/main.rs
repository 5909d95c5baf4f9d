//! Headless demo walking through the hunter/wolf map states

use prowl::prelude::*;

const DT: f32 = 1.0 / 60.0;
const TICKS_PER_STATE: u32 = 600; // ten simulated seconds

fn main() {
    env_logger::init();
    log::info!("Starting steering demo");

    let params = SteeringParams::default()
        .with_max_acceleration(5.0)
        .with_max_speed(10.0);

    let mut scenario = match Scenario::new(params, 0xC0FFEE) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Parameter error: {}", e);
            return;
        }
    };

    for index in 0..=6u8 {
        if let Err(e) = scenario.set_map_state(index) {
            eprintln!("Demo error: {}", e);
            return;
        }

        for _ in 0..TICKS_PER_STATE {
            scenario.tick(DT);
        }

        for npc in scenario.npcs() {
            log::info!(
                "[state {}] {} ended at ({:.2}, {:.2}, {:.2}), speed {:.2}",
                index,
                npc.name,
                npc.kinematic.position.x,
                npc.kinematic.position.y,
                npc.kinematic.position.z,
                npc.kinematic.speed(),
            );
        }
    }

    log::info!("Demo finished");
}

#![no_std]
#![no_main]

use core::cell::RefCell;

use critical_section::Mutex;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::pac::{self, interrupt};
use rp_pico::hal::timer::{Alarm, Alarm0};
use rtt_target::{rprintln, rtt_init_print};
use static_cell::StaticCell;

use oneshot_sequencer::{
    CycleControl, InputMonitor, OneShotSequencer, SequencerAction, ServiceTiming,
};
use rp_pico_demos::time::{Duration, HardwareTimer, Instant};

mod hardware_setup;

use hardware_setup::Led;

type Sequencer = OneShotSequencer<'static, Instant, Led, HardwareTimer>;

/// Sequencer plus the alarm that fires its next step
struct Cycle {
    sequencer: Sequencer,
    alarm: Alarm0,
}

impl Cycle {
    fn schedule(&mut self, timing: ServiceTiming<Duration>) {
        match timing {
            ServiceTiming::Delay(delay) => {
                // Only fails for countdowns beyond the alarm range; the dwell is far inside it
                let _ = self.alarm.schedule(delay.to_alarm_countdown());
            }
            ServiceTiming::Complete => {
                rprintln!("Cycle complete, waiting for next press...");
            }
        }
    }
}

/// Shared between the poll loop and the alarm interrupt
static CYCLE: Mutex<RefCell<Option<Cycle>>> = Mutex::new(RefCell::new(None));

static TIME_SOURCE: StaticCell<HardwareTimer> = StaticCell::new();

/// Poll-loop handle that takes the lock once per call
struct SharedCycle;

impl CycleControl for SharedCycle {
    fn cycle_active(&mut self) -> bool {
        critical_section::with(|cs| {
            CYCLE
                .borrow_ref(cs)
                .as_ref()
                .is_some_and(|cycle| cycle.sequencer.is_active())
        })
    }

    fn start_cycle(&mut self) -> bool {
        critical_section::with(|cs| {
            let mut cycle = CYCLE.borrow_ref_mut(cs);
            let Some(cycle) = cycle.as_mut() else {
                return false;
            };

            match cycle.sequencer.handle_action(SequencerAction::Start) {
                Ok(timing) => {
                    rprintln!("Button pressed, starting LED cycle");
                    cycle.schedule(timing);
                    true
                }
                Err(_) => false,
            }
        })
    }
}

/// Alarm 0 expired: fire the next step
#[interrupt]
fn TIMER_IRQ_0() {
    critical_section::with(|cs| {
        if let Some(cycle) = CYCLE.borrow_ref_mut(cs).as_mut() {
            cycle.alarm.clear_interrupt();

            if let Ok(timing) = cycle.sequencer.handle_action(SequencerAction::Advance) {
                cycle.schedule(timing);
            }
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== One-shot LED Cycle ===");

    let hw = hardware_setup::init_hardware();

    let time_source: &'static HardwareTimer = TIME_SOURCE.init(HardwareTimer::new(hw.timer));
    let sequencer = OneShotSequencer::new(hw.led, time_source);

    critical_section::with(|cs| {
        *CYCLE.borrow_ref_mut(cs) = Some(Cycle {
            sequencer,
            alarm: hw.alarm,
        });
    });

    // SAFETY: CYCLE is populated before the interrupt can fire
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }

    rprintln!("Waiting for button press...");

    let mut monitor = InputMonitor::new(hw.button, hw.timer);
    monitor.run(&mut SharedCycle)
}

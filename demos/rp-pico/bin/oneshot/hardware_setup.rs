use oneshot_sequencer::DigitalRgbLed;
use rp_pico::hal::{
    clocks::init_clocks_and_plls,
    gpio::{
        FunctionSioInput, FunctionSioOutput, Pin, PullDown, PullUp,
        bank0::{Gpio5, Gpio11, Gpio12, Gpio13},
    },
    pac,
    timer::{Alarm, Alarm0},
    watchdog::Watchdog,
    Sio, Timer,
};
use rtt_target::rprintln;

/// Push button on GP5, active-low with internal pull-up
pub type Button = Pin<Gpio5, FunctionSioInput, PullUp>;

/// Green LED on GP11
pub type GreenPin = Pin<Gpio11, FunctionSioOutput, PullDown>;
/// Blue LED on GP12
pub type BluePin = Pin<Gpio12, FunctionSioOutput, PullDown>;
/// Red LED on GP13
pub type RedPin = Pin<Gpio13, FunctionSioOutput, PullDown>;

/// The three LEDs driven as one RGB output (active high)
pub type Led = DigitalRgbLed<GreenPin, BluePin, RedPin>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub led: Led,
    pub button: Button,
    pub timer: Timer,
    pub alarm: Alarm0,
}

/// Initialize all hardware peripherals
///
/// - System clock (125 MHz)
/// - Microsecond timer and alarm 0 with its interrupt enabled
/// - LED outputs on GP11/GP12/GP13
/// - Button input on GP5
pub fn init_hardware() -> HardwareContext {
    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut alarm = timer.alarm_0().unwrap();
    alarm.enable_interrupt();
    rprintln!("Alarm 0 configured");

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let led = DigitalRgbLed::new(
        pins.gpio11.into_push_pull_output(),
        pins.gpio12.into_push_pull_output(),
        pins.gpio13.into_push_pull_output(),
        false,
    );
    rprintln!("LEDs configured on GP11 (green), GP12 (blue), GP13 (red)");

    let button = pins.gpio5.into_pull_up_input();
    rprintln!("Button configured on GP5");

    HardwareContext {
        led,
        button,
        timer,
        alarm,
    }
}

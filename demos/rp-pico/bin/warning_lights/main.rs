#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m::delay::Delay;
use critical_section::Mutex;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::gpio::{self, Interrupt::EdgeLow};
use rp_pico::hal::pac::{self, interrupt};
use rp_pico::hal::pio::PIOExt;
use rp_pico::hal::{Clock, Sio, Timer, clocks::init_clocks_and_plls, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};
use ws2812_pio::Ws2812;

use rp_pico_demos::time::PicoClock;
use warning_lights::{ButtonFlag, Config, Iteration, LedStrip, PatternLibrary, PatternSequencer};

const CONFIG: Config = Config {
    run_self_test: true,
    ..Config::DEFAULT
};

const LEDS: usize = CONFIG.strip_length;

type ButtonPin = gpio::Pin<gpio::bank0::Gpio2, gpio::FunctionSioInput, gpio::PullUp>;

/// Set by the GPIO interrupt, consumed by the sequencer
static BUTTON: ButtonFlag = ButtonFlag::new();

/// Owned by the interrupt handler once configured
static BUTTON_PIN: Mutex<RefCell<Option<ButtonPin>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Warning Lights ===");

    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

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

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Button on GPIO2, active low, falling edge raises the interrupt
    let button: ButtonPin = pins.gpio2.reconfigure();
    button.set_interrupt_enabled(EdgeLow, true);
    critical_section::with(|cs| BUTTON_PIN.borrow(cs).replace(Some(button)));

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let clock = PicoClock::new(timer);
    let delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    // WS2812 data on GPIO10, driven by PIO0
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let ws2812 = Ws2812::new(
        pins.gpio10.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
        timer.count_down(),
    );

    let strip = match LedStrip::<_, LEDS>::new(ws2812, CONFIG.brightness) {
        Ok(strip) => strip,
        Err(e) => {
            rprintln!("Strip setup failed: {}", e);
            panic!();
        }
    };

    rprintln!("Self-test: expect red, green, blue, white on the first four LEDs");
    let library = PatternLibrary::new(strip, delay, &CONFIG);
    let mut sequencer = match PatternSequencer::new(library, &BUTTON, &clock, &CONFIG) {
        Ok(sequencer) => sequencer,
        Err(e) => {
            rprintln!("Configuration rejected: {}", e);
            panic!();
        }
    };

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    rprintln!("=== System Ready ===");
    rprintln!("Press the button to cycle patterns");

    let mut reported_errors = 0;
    loop {
        match sequencer.step() {
            Iteration::Advanced { .. } => rprintln!("{}", sequencer.status()),
            Iteration::Debounced => rprintln!("Bounce ignored"),
            Iteration::Reset { from } => rprintln!("Index {} unbound, back to 0", from),
            Iteration::Played(_) => {}
        }

        let errors = sequencer.library().sink().write_errors();
        if errors != reported_errors {
            rprintln!("Strip write errors: {}", errors);
            reported_errors = errors;
        }
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        if let Some(pin) = BUTTON_PIN.borrow(cs).borrow_mut().as_mut() {
            if pin.interrupt_status(EdgeLow) {
                pin.clear_interrupt(EdgeLow);
                BUTTON.signal();
            }
        }
    });
}

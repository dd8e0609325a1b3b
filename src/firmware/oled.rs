use esp_hal::{
    delay::Delay,
    gpio::Output,
    spi::{master::Spi, Error as SpiError},
    Blocking,
};

use defuser::drivers::paged_oled::{Page, WIDTH};

const SET_PAGE_ADDRESS: u8 = 0xB0;
const SET_LOW_COLUMN: u8 = 0x00;
const SET_HIGH_COLUMN: u8 = 0x10;

/// 128x64 panel, internal charge pump, page addressing.
const INIT_SEQUENCE: [u8; 25] = [
    0xAE, // display off
    0xD5, 0x80, // clock divide
    0xA8, 0x3F, // multiplex 64
    0xD3, 0x00, // display offset
    0x40, // start line 0
    0x8D, 0x14, // charge pump on
    0x20, 0x02, // page addressing
    0xA1, // segment remap
    0xC8, // COM scan descending
    0xDA, 0x12, // COM pins
    0x81, 0xCF, // contrast
    0xD9, 0xF1, // precharge
    0xDB, 0x40, // VCOMH
    0xA4, // resume from RAM
    0xA6, // normal polarity
    0xAF, // display on
];

/// SSD1306 on a 4-wire SPI bus.
pub(crate) struct Ssd1306 {
    spi: Spi<'static, Blocking>,
    dc: Output<'static>,
    cs: Output<'static>,
    reset: Output<'static>,
}

impl Ssd1306 {
    pub(crate) fn new(
        spi: Spi<'static, Blocking>,
        dc: Output<'static>,
        cs: Output<'static>,
        reset: Output<'static>,
    ) -> Self {
        Self { spi, dc, cs, reset }
    }

    pub(crate) fn init(&mut self) -> Result<(), SpiError> {
        let delay = Delay::new();
        self.reset.set_low();
        delay.delay_millis(1);
        self.reset.set_high();
        delay.delay_millis(1);
        self.command(&INIT_SEQUENCE)
    }

    pub(crate) fn write_page(&mut self, page: u8, bytes: &Page) -> Result<(), SpiError> {
        self.command(&[SET_PAGE_ADDRESS | page, SET_LOW_COLUMN, SET_HIGH_COLUMN])?;
        let mut data = [0u8; WIDTH];
        data.copy_from_slice(bytes);
        self.data(&mut data)
    }

    fn command(&mut self, bytes: &[u8]) -> Result<(), SpiError> {
        let mut buffer = [0u8; INIT_SEQUENCE.len()];
        let buffer = &mut buffer[..bytes.len()];
        buffer.copy_from_slice(bytes);
        self.dc.set_low();
        self.select(buffer)
    }

    fn data(&mut self, bytes: &mut [u8]) -> Result<(), SpiError> {
        self.dc.set_high();
        self.select(bytes)
    }

    fn select(&mut self, bytes: &mut [u8]) -> Result<(), SpiError> {
        self.cs.set_low();
        let result = self.spi.transfer(bytes).map(|_| ());
        self.cs.set_high();
        result
    }
}

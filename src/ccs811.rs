// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

use crate::bitfield::{BitField, Field};
use crate::bus::{BusError, RegisterBus};
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
use log::{debug, warn};
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::{thread, time};

/// Default 7 bit address of the CCS811 (ADDR pin low)
pub const CCS811_ADDRESS: u16 = 0x5A;
/// I2C bus the driver opens when none is given
pub const DEFAULT_I2C_PATH: &str = "/dev/i2c-1";
/// Value of the HW_ID register on every CCS811
pub const CCS811_HW_ID_CODE: u8 = 0x81;
/// Reference resistor in series with the NTC, in ohms
pub const CCS811_REF_RESISTOR: f32 = 100_000.0;

/// Register map, application mode unless noted
pub mod register {
    pub const STATUS: u8 = 0x00;
    pub const MEAS_MODE: u8 = 0x01;
    /// 8 bytes: eCO2, TVOC, STATUS, ERROR_ID, RAW_DATA
    pub const ALG_RESULT_DATA: u8 = 0x02;
    /// 2 bytes
    pub const RAW_DATA: u8 = 0x03;
    /// 4 bytes: humidity, temperature
    pub const ENV_DATA: u8 = 0x05;
    /// 4 bytes: vref, vrntc
    pub const NTC: u8 = 0x06;
    /// 5 bytes: low-medium, medium-high, hysteresis
    pub const THRESHOLDS: u8 = 0x10;
    /// 2 bytes
    pub const BASELINE: u8 = 0x11;
    pub const HW_ID: u8 = 0x20;
    pub const HW_VERSION: u8 = 0x21;
    /// 2 bytes
    pub const FW_BOOT_VERSION: u8 = 0x23;
    /// 2 bytes
    pub const FW_APP_VERSION: u8 = 0x24;
    pub const ERROR_ID: u8 = 0xE0;
    /// 4 bytes, magic sequence
    pub const SW_RESET: u8 = 0xFF;

    // Bootloader mode
    pub const APP_ERASE: u8 = 0xF1;
    pub const APP_DATA: u8 = 0xF2;
    pub const APP_VERIFY: u8 = 0xF3;
    /// Zero length write
    pub const APP_START: u8 = 0xF4;
}

const SW_RESET_SEQUENCE: [u8; 4] = [0x11, 0xE5, 0x72, 0x8A];
const APP_START_DELAY: time::Duration = time::Duration::from_millis(100);

// Environmental data is stored in 1/512 units, temperature offset by 25 C.
const ENV_FRACTION_STEP: f32 = 0.001953125;
const ENV_TEMPERATURE_OFFSET: f32 = 25.0;
const ENV_TEMPERATURE_MAX: f32 = 127.0 + 511.0 * ENV_FRACTION_STEP - ENV_TEMPERATURE_OFFSET;
const ENV_HUMIDITY_MAX: f32 = 127.5;

const NTC_BETA: f32 = 3380.0;
const NTC_NOMINAL_RESISTANCE: f32 = 10_000.0;
const NTC_NOMINAL_TEMPERATURE: f32 = 25.0;
const KELVIN_OFFSET: f32 = 273.15;

///
///CCS811 error enum. Bus wraps the error of the
///underlying transport, the rest are reported by
///the driver itself.
///
#[derive(Debug)]
pub enum Ccs811Error<E> {
    /// Transport error from the I2C bus
    Bus(E),
    /// Drive mode outside the five the device supports, or
    /// environmental data that is NaN or infinite
    InvalidArgument,
    /// HW_ID register did not hold 0x81, carries the value read
    DeviceNotFound(u8),
    /// The device refused to start
    DeviceError(DeviceFault),
    /// The NTC reading cannot be turned into a temperature
    SensorReadError,
}

/// Why the device failed to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFault {
    /// STATUS reported ERROR after the application start
    ErrorFlag,
    /// STATUS still reported bootloader mode after the application start
    BootloaderMode,
}

///Implementation of display for Ccs811Error
impl<E: fmt::Display> fmt::Display for Ccs811Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Ccs811Error::Bus(ref e) => fmt::Display::fmt(e, f),
            Ccs811Error::InvalidArgument => fmt::Display::fmt(
                "Invalid argument, drive mode must be one of Idle, Sec1, Sec10, Sec60 or Ms250 \
                 and environmental data must be finite",
                f,
            ),
            Ccs811Error::DeviceNotFound(id) => write!(
                f,
                "Device ID returned is not correct (0x{:02X}), please check your wiring",
                id
            ),
            Ccs811Error::DeviceError(DeviceFault::ErrorFlag) => fmt::Display::fmt(
                "Device returned an error, try removing and reapplying power",
                f,
            ),
            Ccs811Error::DeviceError(DeviceFault::BootloaderMode) => fmt::Display::fmt(
                "Device did not enter application mode, the firmware may be damaged",
                f,
            ),
            Ccs811Error::SensorReadError => fmt::Display::fmt("Invalid NTC reading", f),
        }
    }
}

///Implementation for Error to Ccs811Error
impl<E: Error + 'static> Error for Ccs811Error<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Ccs811Error::Bus(ref e) => Some(e),
            _ => None,
        }
    }
}

/// Measurement interval of the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DriveMode {
    /// Measurements disabled
    Idle = 0,
    /// One measurement every second
    #[default]
    Sec1 = 1,
    /// One measurement every 10 seconds
    Sec10 = 2,
    /// One measurement every 60 seconds
    Sec60 = 3,
    /// Raw data every 250 ms, no algorithm results
    Ms250 = 4,
}

/// Raw drive mode value that names no [`DriveMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDriveMode(pub u8);

impl TryFrom<u8> for DriveMode {
    type Error = InvalidDriveMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DriveMode::Idle),
            1 => Ok(DriveMode::Sec1),
            2 => Ok(DriveMode::Sec10),
            3 => Ok(DriveMode::Sec60),
            4 => Ok(DriveMode::Ms250),
            other => Err(InvalidDriveMode(other)),
        }
    }
}

/// STATUS register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Error,
    Reserved1,
    DataReady,
    AppValid,
    Reserved5,
    /// Set in application mode, clear in bootloader mode
    FwMode,
}

impl Field for StatusField {
    const LAYOUT: &'static [(Self, u8)] = &[
        (StatusField::Error, 1),
        (StatusField::Reserved1, 2),
        (StatusField::DataReady, 1),
        (StatusField::AppValid, 1),
        (StatusField::Reserved5, 2),
        (StatusField::FwMode, 1),
    ];
}

/// MEAS_MODE register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasModeField {
    Reserved0,
    IntThresh,
    IntDataReady,
    DriveMode,
}

impl Field for MeasModeField {
    const LAYOUT: &'static [(Self, u8)] = &[
        (MeasModeField::Reserved0, 2),
        (MeasModeField::IntThresh, 1),
        (MeasModeField::IntDataReady, 1),
        (MeasModeField::DriveMode, 3),
    ];
}

/// ERROR_ID register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorIdField {
    /// Write to an invalid register address
    WriteRegInvalid,
    /// Read from an invalid register address
    ReadRegInvalid,
    /// Unsupported mode written to MEAS_MODE
    MeasModeInvalid,
    /// Sensor resistance reached the top of its range
    MaxResistance,
    /// Heater current out of range
    HeaterFault,
    /// Heater voltage not applied correctly
    HeaterSupply,
}

impl Field for ErrorIdField {
    const LAYOUT: &'static [(Self, u8)] = &[
        (ErrorIdField::WriteRegInvalid, 1),
        (ErrorIdField::ReadRegInvalid, 1),
        (ErrorIdField::MeasModeInvalid, 1),
        (ErrorIdField::MaxResistance, 1),
        (ErrorIdField::HeaterFault, 1),
        (ErrorIdField::HeaterSupply, 1),
    ];
}

/// Firmware version as major.minor.trivial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub trivial: u8,
}

impl From<[u8; 2]> for FirmwareVersion {
    fn from(raw: [u8; 2]) -> Self {
        FirmwareVersion {
            major: raw[0] >> 4,
            minor: raw[0] & 0x0F,
            trivial: raw[1],
        }
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.trivial)
    }
}

/// Content of RAW_DATA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawData {
    /// Current through the sensor, in uA
    pub current: u8,
    /// 10 bit ADC reading of the sensor voltage, 1023 = 1.65 V
    pub voltage: u16,
}

/// CCS811 Struct, wraps a bus handle and the
/// driver side copies of the STATUS, MEAS_MODE and
/// ERROR_ID registers.
///
/// The driver does no locking; callers sharing it across
/// threads must serialize access themselves.
///
#[derive(Debug)]
pub struct Ccs811<B> {
    bus: B,
    status: BitField<StatusField>,
    meas_mode: BitField<MeasModeField>,
    error_id: BitField<ErrorIdField>,
    eco2: u16,
    tvoc: u16,
    temperature_offset: f32,
}

impl Ccs811<LinuxI2CDevice> {
    /// Opens the CCS811 on a Linux I2C bus and starts it.
    ///
    /// `path` is usually [`DEFAULT_I2C_PATH`] and `address`
    /// [`CCS811_ADDRESS`]. The drive mode is validated before
    /// the bus is opened.
    ///
    pub fn open<P, M>(
        path: P,
        address: u16,
        mode: M,
    ) -> Result<Ccs811<LinuxI2CDevice>, Ccs811Error<BusError<LinuxI2CError>>>
    where
        P: AsRef<Path>,
        M: TryInto<DriveMode>,
    {
        let mode = validate_mode::<BusError<LinuxI2CError>, _>(mode)?;
        let device = LinuxI2CDevice::new(path, address)
            .map_err(|e| Ccs811Error::Bus(BusError::I2c(e)))?;
        Ccs811::new(device, mode)
    }
}

/// Implementation of CCS811 related
/// operations
///
impl<B: RegisterBus> Ccs811<B> {
    /// Create a new CCS811 Struct and run the start up handshake.
    ///
    /// Checks the hardware id, moves the device from bootloader to
    /// application mode, makes sure no error is flagged, disables the
    /// data ready interrupt and applies `mode`. Any failure drops the
    /// driver; nothing half initialized is returned.
    ///
    pub fn new<M: TryInto<DriveMode>>(bus: B, mode: M) -> Result<Self, Ccs811Error<B::Error>> {
        let mode = validate_mode::<B::Error, _>(mode)?;
        let mut sensor = Ccs811 {
            bus,
            status: BitField::new(),
            meas_mode: BitField::new(),
            error_id: BitField::new(),
            eco2: 0,
            tvoc: 0,
            temperature_offset: 0.0,
        };

        let hw_id = sensor.read_register(register::HW_ID)?;
        if hw_id != CCS811_HW_ID_CODE {
            warn!("Unexpected CCS811 hardware id 0x{:02X}", hw_id);
            return Err(Ccs811Error::DeviceNotFound(hw_id));
        }

        debug!("Starting CCS811 application");
        sensor.write_block(register::APP_START, &[])?;
        thread::sleep(APP_START_DELAY);

        if sensor.check_error()? {
            warn!("CCS811 flagged an error after application start");
            return Err(Ccs811Error::DeviceError(DeviceFault::ErrorFlag));
        }
        if !sensor.status.is_set(StatusField::FwMode) {
            warn!("CCS811 is still in bootloader mode");
            return Err(Ccs811Error::DeviceError(DeviceFault::BootloaderMode));
        }

        sensor.disable_interrupt()?;
        sensor.set_drive_mode(mode)?;
        Ok(sensor)
    }

    /// Gives the bus handle back, dropping the driver.
    pub fn release(self) -> B {
        self.bus
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Ccs811Error<B::Error>> {
        self.bus.read_byte(register).map_err(Ccs811Error::Bus)
    }

    fn read_block(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Ccs811Error<B::Error>> {
        self.bus.read_bytes(register, buffer).map_err(Ccs811Error::Bus)
    }

    fn write_block(&mut self, register: u8, data: &[u8]) -> Result<(), Ccs811Error<B::Error>> {
        self.bus.write_bytes(register, data).map_err(Ccs811Error::Bus)
    }

    fn refresh_status(&mut self) -> Result<(), Ccs811Error<B::Error>> {
        let raw = self.read_register(register::STATUS)?;
        self.status = BitField::from_raw(raw);
        Ok(())
    }

    fn write_meas_mode(&mut self) -> Result<(), Ccs811Error<B::Error>> {
        let raw = self.meas_mode.encode();
        debug!("Writing MEAS_MODE 0x{:02X}", raw);
        self.bus
            .write_byte(register::MEAS_MODE, raw)
            .map_err(Ccs811Error::Bus)
    }

    /// Sets how often the sensor measures.
    pub fn set_drive_mode(&mut self, mode: DriveMode) -> Result<(), Ccs811Error<B::Error>> {
        self.meas_mode.set(MeasModeField::DriveMode, mode as u8);
        self.write_meas_mode()
    }

    /// Drive mode last written to the device.
    pub fn drive_mode(&self) -> DriveMode {
        let raw = self.meas_mode.get(MeasModeField::DriveMode);
        DriveMode::try_from(raw).unwrap_or(DriveMode::Idle)
    }

    /// Makes the device assert nINT when new data is ready.
    pub fn enable_interrupt(&mut self) -> Result<(), Ccs811Error<B::Error>> {
        self.meas_mode.set_flag(MeasModeField::IntDataReady, true);
        self.write_meas_mode()
    }

    /// Stops the device asserting nINT.
    pub fn disable_interrupt(&mut self) -> Result<(), Ccs811Error<B::Error>> {
        self.meas_mode.set_flag(MeasModeField::IntDataReady, false);
        self.write_meas_mode()
    }

    /// Restricts nINT to eCO2 crossing the configured thresholds.
    /// Only effective while the data ready interrupt is enabled.
    pub fn enable_threshold_interrupt(&mut self) -> Result<(), Ccs811Error<B::Error>> {
        self.meas_mode.set_flag(MeasModeField::IntThresh, true);
        self.write_meas_mode()
    }

    /// Goes back to asserting nINT on every new measurement.
    pub fn disable_threshold_interrupt(&mut self) -> Result<(), Ccs811Error<B::Error>> {
        self.meas_mode.set_flag(MeasModeField::IntThresh, false);
        self.write_meas_mode()
    }

    /// Gets if the device has a new measurement ready.
    /// Reads STATUS from the device on every call.
    pub fn available(&mut self) -> Result<bool, Ccs811Error<B::Error>> {
        self.refresh_status()?;
        Ok(self.status.is_set(StatusField::DataReady))
    }

    /// Reads eCO2 and TVOC if a new measurement is ready.
    ///
    /// Returns `None` when there is nothing new yet, which is the normal
    /// outcome while polling. Otherwise the measurement is stored (see
    /// [`Ccs811::eco2`] and [`Ccs811::tvoc`]) and the result is the ERROR_ID
    /// byte of the result block when STATUS reports an error, 0 if not.
    ///
    pub fn read_data(&mut self) -> Result<Option<u8>, Ccs811Error<B::Error>> {
        if !self.available()? {
            return Ok(None);
        }
        let mut buffer = [0u8; 8];
        self.read_block(register::ALG_RESULT_DATA, &mut buffer)?;

        self.eco2 = u16::from_be_bytes([buffer[0], buffer[1]]);
        self.tvoc = u16::from_be_bytes([buffer[2], buffer[3]]);

        if self.status.is_set(StatusField::Error) {
            warn!("CCS811 reported error id 0x{:02X}", buffer[5]);
            Ok(Some(buffer[5]))
        } else {
            Ok(Some(0))
        }
    }

    /// Last eCO2 read, in ppm.
    pub fn eco2(&self) -> u16 {
        self.eco2
    }

    /// Last TVOC read, in ppb.
    pub fn tvoc(&self) -> u16 {
        self.tvoc
    }

    /// Sends ambient humidity (%RH) and temperature (Celsius) so the
    /// algorithm can compensate for them. Values outside what the
    /// register encodes are clamped; NaN or infinite values are
    /// rejected with [`Ccs811Error::InvalidArgument`] and nothing is written.
    pub fn set_environmental_data(
        &mut self,
        humidity: f32,
        temperature: f32,
    ) -> Result<(), Ccs811Error<B::Error>> {
        if !humidity.is_finite() || !temperature.is_finite() {
            warn!(
                "Rejected environmental data humidity={} temperature={}",
                humidity, temperature
            );
            return Err(Ccs811Error::InvalidArgument);
        }
        let buffer = encode_environment(humidity, temperature);
        debug!("Writing ENV_DATA {:02X?}", buffer);
        self.write_block(register::ENV_DATA, &buffer)
    }

    /// Temperature from the NTC thermistor wired to the sensor,
    /// minus the temperature offset.
    pub fn calculate_temperature(&mut self) -> Result<f32, Ccs811Error<B::Error>> {
        let mut buffer = [0u8; 4];
        self.read_block(register::NTC, &mut buffer)?;

        let vref = u16::from_be_bytes([buffer[0], buffer[1]]);
        let vrntc = u16::from_be_bytes([buffer[2], buffer[3]]);
        match ntc_temperature(vref, vrntc) {
            Some(temperature) => Ok(temperature - self.temperature_offset),
            None => {
                warn!("Unusable NTC reading vref={} vrntc={}", vref, vrntc);
                Err(Ccs811Error::SensorReadError)
            }
        }
    }

    /// Offset subtracted from the NTC temperature, 0 by default.
    pub fn temperature_offset(&self) -> f32 {
        self.temperature_offset
    }

    /// Calibration subtracted from every [`Ccs811::calculate_temperature`]
    /// result, usually `calculate_temperature() - known_ambient`.
    pub fn set_temperature_offset(&mut self, offset: f32) {
        self.temperature_offset = offset;
    }

    /// Sets the eCO2 thresholds (ppm) and hysteresis used by the
    /// threshold interrupt.
    pub fn set_thresholds(
        &mut self,
        low_med: u16,
        med_high: u16,
        hysteresis: u8,
    ) -> Result<(), Ccs811Error<B::Error>> {
        let buffer = encode_thresholds(low_med, med_high, hysteresis);
        self.write_block(register::THRESHOLDS, &buffer)
    }

    /// Soft reset the sensor device.
    /// The device returns to bootloader mode and needs a new
    /// driver before it can measure again.
    ///
    pub fn software_reset(&mut self) -> Result<(), Ccs811Error<B::Error>> {
        debug!("Resetting CCS811");
        self.write_block(register::SW_RESET, &SW_RESET_SEQUENCE)
    }

    /// Reads STATUS and returns the ERROR bit.
    pub fn check_error(&mut self) -> Result<bool, Ccs811Error<B::Error>> {
        self.refresh_status()?;
        Ok(self.status.is_set(StatusField::Error))
    }

    /// Reads ERROR_ID. The flags are left for the caller to inspect.
    pub fn read_error_id(&mut self) -> Result<BitField<ErrorIdField>, Ccs811Error<B::Error>> {
        let raw = self.read_register(register::ERROR_ID)?;
        self.error_id = BitField::from_raw(raw);
        Ok(self.error_id)
    }

    /// STATUS as of the last call that read it.
    pub fn status(&self) -> BitField<StatusField> {
        self.status
    }

    /// HW_VERSION, 0x1X on every CCS811.
    pub fn hardware_version(&mut self) -> Result<u8, Ccs811Error<B::Error>> {
        self.read_register(register::HW_VERSION)
    }

    /// Version of the bootloader firmware.
    pub fn firmware_boot_version(&mut self) -> Result<FirmwareVersion, Ccs811Error<B::Error>> {
        let mut buffer = [0u8; 2];
        self.read_block(register::FW_BOOT_VERSION, &mut buffer)?;
        Ok(FirmwareVersion::from(buffer))
    }

    /// Version of the application firmware.
    pub fn firmware_app_version(&mut self) -> Result<FirmwareVersion, Ccs811Error<B::Error>> {
        let mut buffer = [0u8; 2];
        self.read_block(register::FW_APP_VERSION, &mut buffer)?;
        Ok(FirmwareVersion::from(buffer))
    }

    /// Encoded baseline of the algorithm, to be restored later
    /// with [`Ccs811::set_baseline`].
    pub fn baseline(&mut self) -> Result<[u8; 2], Ccs811Error<B::Error>> {
        let mut buffer = [0u8; 2];
        self.read_block(register::BASELINE, &mut buffer)?;
        Ok(buffer)
    }

    /// Restores a baseline saved with [`Ccs811::baseline`].
    pub fn set_baseline(&mut self, baseline: [u8; 2]) -> Result<(), Ccs811Error<B::Error>> {
        self.write_block(register::BASELINE, &baseline)
    }

    /// Sensor current and voltage behind the last measurement.
    pub fn raw_data(&mut self) -> Result<RawData, Ccs811Error<B::Error>> {
        let mut buffer = [0u8; 2];
        self.read_block(register::RAW_DATA, &mut buffer)?;
        Ok(RawData {
            current: buffer[0] >> 2,
            voltage: u16::from_be_bytes([buffer[0] & 0x03, buffer[1]]),
        })
    }
}

fn validate_mode<E, M: TryInto<DriveMode>>(mode: M) -> Result<DriveMode, Ccs811Error<E>> {
    mode.try_into().map_err(|_| {
        warn!("Rejected unknown CCS811 drive mode");
        Ccs811Error::InvalidArgument
    })
}

/// ENV_DATA payload. Humidity goes in units of 0.5 %RH in the high byte.
/// Temperature is split as floor/fraction so negative values keep a
/// fraction in [0, 1): -0.5 C encodes as 24 + 256/512 above -25 C.
fn encode_environment(humidity: f32, temperature: f32) -> [u8; 4] {
    let humidity = humidity.clamp(0.0, ENV_HUMIDITY_MAX);
    let humidity = (humidity * 2.0).round() as u8;

    let temperature = temperature.clamp(-ENV_TEMPERATURE_OFFSET, ENV_TEMPERATURE_MAX);
    let integer = temperature.floor();
    let fractional = temperature - integer;
    let high = ((integer + ENV_TEMPERATURE_OFFSET) as u16) << 9;
    let low = ((fractional / ENV_FRACTION_STEP) as u16) & 0x1FF;
    let [temp_high, temp_low] = (high | low).to_be_bytes();

    [humidity, 0x00, temp_high, temp_low]
}

/// Beta equation on the thermistor, referenced to 10k at 25 C.
fn ntc_temperature(vref: u16, vrntc: u16) -> Option<f32> {
    if vref == 0 || vrntc == 0 {
        return None;
    }
    let rntc = f32::from(vrntc) * CCS811_REF_RESISTOR / f32::from(vref);

    let mut temperature = (rntc / NTC_NOMINAL_RESISTANCE).ln();
    temperature /= NTC_BETA;
    temperature += 1.0 / (NTC_NOMINAL_TEMPERATURE + KELVIN_OFFSET);
    temperature = 1.0 / temperature;
    temperature -= KELVIN_OFFSET;

    temperature.is_finite().then_some(temperature)
}

fn encode_thresholds(low_med: u16, med_high: u16, hysteresis: u8) -> [u8; 5] {
    let [low_med_high, low_med_low] = low_med.to_be_bytes();
    let [med_high_high, med_high_low] = med_high.to_be_bytes();
    [low_med_high, low_med_low, med_high_high, med_high_low, hysteresis]
}
